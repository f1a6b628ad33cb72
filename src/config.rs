use crate::error::{NotifierError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub search_for: Vec<SearchPattern>,
    pub inspect_x_last_emails: usize,
}

/// A named rule. Absent patterns are left out of the JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPattern {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_in_subject: Option<String>,
}

impl SearchPattern {
    pub fn by_sender(name: &str, sender: &str) -> Self {
        Self {
            name: name.to_string(),
            sender: Some(sender.to_string()),
            ..Default::default()
        }
    }

    pub fn by_subject(name: &str, subject: &str) -> Self {
        Self {
            name: name.to_string(),
            subject: Some(subject.to_string()),
            ..Default::default()
        }
    }

    pub fn excluding(mut self, exclude_in_subject: &str) -> Self {
        self.exclude_in_subject = Some(exclude_in_subject.to_string());
        self
    }

    /// A rule without sender and subject patterns can never match.
    pub fn is_empty(&self) -> bool {
        self.sender.is_none() && self.subject.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_for: vec![
                SearchPattern {
                    name: "Linkedin".to_string(),
                    sender: Some(r".*linkedin.*".to_string()),
                    subject: None,
                    exclude_in_subject: Some(r"newsletter|digest".to_string()),
                },
                SearchPattern {
                    name: "Interview".to_string(),
                    sender: None,
                    subject: Some(r"interview|entrevista".to_string()),
                    exclude_in_subject: None,
                },
            ],
            inspect_x_last_emails: 10,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (i, pattern) in self.search_for.iter().enumerate() {
            if pattern.name.trim().is_empty() {
                return Err(NotifierError::ConfigParse(format!(
                    "search_for[{i}] has an empty name"
                )));
            }
            if pattern.is_empty() {
                log::warn!(
                    "Pattern '{}' has neither 'sender' nor 'subject' and will never match",
                    pattern.name
                );
            }
        }
        log::debug!(
            "Loaded {} patterns, inspecting up to {} emails",
            self.search_for.len(),
            self.inspect_x_last_emails
        );
        Ok(())
    }
}
