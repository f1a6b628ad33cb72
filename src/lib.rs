pub mod config;
pub mod error;
pub mod filter;
pub mod installation;
pub mod mail;
pub mod notifier;
pub mod pipeline;

pub use config::{Config, SearchPattern};
pub use error::NotifierError;
pub use filter::FilterEngine;
pub use installation::Installation;
pub use mail::{parse_records, EmailRecord, MailFormat};
pub use notifier::{DesktopNotifier, DryRunNotifier, Notification, Notifier};
pub use pipeline::process_batch;
