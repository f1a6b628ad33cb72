use std::path::PathBuf;

/// Every failure the notifier can hit. All of them are fatal for the batch.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("The script was not installed yet. ({})", .0.display())]
    InstallationMissing(PathBuf),

    #[error("The config file was not found :( The installation might have failed. ({})", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Sound asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("Invalid configuration: {0}")]
    ConfigParse(String),

    #[error("Malformed input: got {count} values, expected a multiple of {field_count}")]
    MalformedInput { count: usize, field_count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for NotifierError {
    fn from(e: serde_json::Error) -> Self {
        NotifierError::ConfigParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
