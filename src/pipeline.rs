use crate::error::Result;
use crate::filter::FilterEngine;
use crate::mail::{parse_records, MailFormat};
use crate::notifier::{notify_all, Notifier};

/// Parses one batch of new emails, matches it and dispatches the results.
/// Returns the number of notifications sent.
pub fn process_batch(
    engine: &FilterEngine,
    flat: &[String],
    notifier: &dyn Notifier,
) -> Result<usize> {
    let emails = parse_records(flat, MailFormat::FIELD_COUNT)?;
    let notifications = engine.evaluate(&emails);
    Ok(notify_all(notifier, &notifications))
}

/// Drops the new-email count some mail checkers pass before the emails.
/// A count that disagrees with the number of emails is only logged.
pub fn strip_count_prefix(args: &[String]) -> &[String] {
    let Some((count, rest)) = args.split_first() else {
        return args;
    };

    match count.trim().parse::<usize>() {
        Ok(count) => {
            let received = rest.len() / MailFormat::FIELD_COUNT;
            if count != received {
                log::warn!("Mail checker reported {count} new emails but passed {received}");
            }
        }
        Err(_) => log::warn!("Expected an email count as first argument, got '{count}'"),
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_strip_count_prefix() {
        let input = args(&["1", "acct", "jobs@linkedin.com", "Unimed hiring"]);
        assert_eq!(
            strip_count_prefix(&input),
            &args(&["acct", "jobs@linkedin.com", "Unimed hiring"])[..]
        );
    }

    #[test]
    fn test_strip_count_prefix_mismatch_still_strips() {
        let input = args(&["5", "acct", "sender", "subject"]);
        assert_eq!(strip_count_prefix(&input).len(), 3);
    }

    #[test]
    fn test_strip_count_prefix_empty() {
        assert!(strip_count_prefix(&[]).is_empty());
    }
}
