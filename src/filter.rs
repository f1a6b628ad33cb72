use crate::config::{Config, SearchPattern};
use crate::error::{NotifierError, Result};
use crate::mail::EmailRecord;
use crate::notifier::Notification;

use regex::{Regex, RegexBuilder};

/// A search pattern with its regexes compiled once at load time.
struct CompiledPattern {
    name: String,
    sender: Option<Regex>,
    subject: Option<Regex>,
    exclude_in_subject: Option<Regex>,
}

impl CompiledPattern {
    fn new(pattern: &SearchPattern) -> Result<Self> {
        Ok(Self {
            name: pattern.name.clone(),
            sender: compile(&pattern.name, pattern.sender.as_deref())?,
            subject: compile(&pattern.name, pattern.subject.as_deref())?,
            exclude_in_subject: compile(&pattern.name, pattern.exclude_in_subject.as_deref())?,
        })
    }

    fn matches(&self, email: &EmailRecord) -> bool {
        let sender = self
            .sender
            .as_ref()
            .map(|regex| regex.is_match(&email.sender_email));
        let subject = self
            .subject
            .as_ref()
            .map(|regex| regex.is_match(&email.subject));

        // Both given: both must match. Only one given: it alone decides.
        let include = match (sender, subject) {
            (Some(sender), Some(subject)) => sender && subject,
            (Some(sender), None) => sender,
            (None, Some(subject)) => subject,
            (None, None) => false,
        };

        let exclude = self
            .exclude_in_subject
            .as_ref()
            .is_some_and(|regex| regex.is_match(&email.subject));

        include && !exclude
    }

    fn notification(&self, email: &EmailRecord) -> Notification {
        Notification {
            title: format!("Pattern: {}", self.name),
            body: format!("Sender: {} \n\n{}", email.sender_email, email.subject),
        }
    }
}

/// Case-insensitive and unanchored, so it behaves like a substring search.
fn compile(rule: &str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    NotifierError::ConfigParse(format!(
                        "Invalid regex pattern '{pattern}' in '{rule}': {e}"
                    ))
                })
        })
        .transpose()
}

pub struct FilterEngine {
    patterns: Vec<CompiledPattern>,
    inspect_x_last_emails: usize,
}

impl FilterEngine {
    pub fn new(config: Config) -> Result<Self> {
        let patterns = config
            .search_for
            .iter()
            .map(CompiledPattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(FilterEngine {
            patterns,
            inspect_x_last_emails: config.inspect_x_last_emails,
        })
    }

    pub fn pattern_names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    /// Notifications grouped by pattern (config order), then by email order.
    /// Only the first `inspect_x_last_emails` emails are looked at.
    pub fn evaluate(&self, emails: &[EmailRecord]) -> Vec<Notification> {
        let to_inspect = &emails[..self.inspect_x_last_emails.min(emails.len())];
        let mut notifications = Vec::new();

        for pattern in &self.patterns {
            let before = notifications.len();
            for email in to_inspect {
                let matches = pattern.matches(email);
                log::debug!(
                    "Pattern '{}' vs '{}' / '{}': {}",
                    pattern.name,
                    email.sender_email,
                    email.subject,
                    matches
                );
                if matches {
                    notifications.push(pattern.notification(email));
                }
            }

            let matched = notifications.len() - before;
            if matched > 0 {
                log::info!("Pattern '{}' matched {} emails", pattern.name, matched);
            }
        }

        notifications
    }
}
