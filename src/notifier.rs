use std::path::PathBuf;
use std::process::{Command, Stdio};

pub const NOTIFY_COMMAND: &str = "notify-send";
pub const SOUND_COMMAND: &str = "paplay";

/// One desktop alert produced by a matching pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Delivers notifications. Delivery is best-effort and never fails the batch.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Pops up a desktop notification and plays the ring sound.
///
/// Child processes are spawned and left running; nothing waits for them.
pub struct DesktopNotifier {
    notify_command: String,
    sound_command: String,
    sound: PathBuf,
}

impl DesktopNotifier {
    pub fn new<P: Into<PathBuf>>(sound: P) -> Self {
        Self {
            notify_command: NOTIFY_COMMAND.to_string(),
            sound_command: SOUND_COMMAND.to_string(),
            sound: sound.into(),
        }
    }

    pub fn with_commands(mut self, notify_command: &str, sound_command: &str) -> Self {
        self.notify_command = notify_command.to_string();
        self.sound_command = sound_command.to_string();
        self
    }

    fn spawn_detached(&self, command: &mut Command) -> bool {
        match command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                log::debug!("Spawned {:?} (pid {})", command.get_program(), child.id());
                true
            }
            Err(e) => {
                log::warn!("Failed to launch {:?}: {e}", command.get_program());
                false
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) {
        self.spawn_detached(
            Command::new(&self.notify_command)
                .arg(&notification.title)
                .arg(&notification.body),
        );
        self.spawn_detached(Command::new(&self.sound_command).arg(&self.sound));
    }
}

/// Prints notifications instead of showing them.
pub struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    fn notify(&self, notification: &Notification) {
        println!("🔔 {}", notification.title);
        for line in notification.body.lines() {
            println!("   {line}");
        }
    }
}

/// Dispatches every notification in order and returns how many were sent.
pub fn notify_all(notifier: &dyn Notifier, notifications: &[Notification]) -> usize {
    for notification in notifications {
        notifier.notify(notification);
    }
    if !notifications.is_empty() {
        log::info!("Dispatched {} notifications", notifications.len());
    }
    notifications.len()
}
