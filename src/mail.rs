use crate::error::{NotifierError, Result};

/// Position of each field inside one record of the flat argument list.
pub struct MailFormat;

impl MailFormat {
    pub const ACCOUNT_EMAIL: usize = 0;
    pub const SENDER_EMAIL: usize = 1;
    pub const SUBJECT: usize = 2;
    pub const FIELD_COUNT: usize = 3;
}

/// One new email as reported by the mail checker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailRecord {
    pub account_email: String,
    pub sender_email: String,
    pub subject: String,
}

impl EmailRecord {
    pub fn new(account_email: &str, sender_email: &str, subject: &str) -> Self {
        Self {
            account_email: account_email.to_string(),
            sender_email: sender_email.to_string(),
            subject: subject.to_string(),
        }
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            account_email: fields[MailFormat::ACCOUNT_EMAIL].clone(),
            sender_email: fields[MailFormat::SENDER_EMAIL].clone(),
            subject: fields[MailFormat::SUBJECT].clone(),
        }
    }
}

/// Groups a flat `[account, sender, subject, ...]` list into records,
/// keeping the order they were received in.
pub fn parse_records(flat: &[String], field_count: usize) -> Result<Vec<EmailRecord>> {
    if field_count != MailFormat::FIELD_COUNT || flat.len() % field_count != 0 {
        return Err(NotifierError::MalformedInput {
            count: flat.len(),
            field_count,
        });
    }

    let records: Vec<EmailRecord> = flat
        .chunks_exact(field_count)
        .map(EmailRecord::from_fields)
        .collect();

    log::debug!("Parsed {} new emails", records.len());
    Ok(records)
}
