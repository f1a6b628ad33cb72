use mail_notifier::{
    process_batch, FilterEngine, Installation, Notification, Notifier, NotifierError,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.borrow_mut().push(notification.clone());
    }
}

fn install(dir: &Path, config: &str) -> Installation {
    fs::write(dir.join("config.json"), config).unwrap();
    fs::create_dir_all(dir.join("assets")).unwrap();
    fs::write(dir.join("assets/ring.aif"), b"FORM").unwrap();
    Installation::new(dir)
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn engine_for(config: &str) -> (tempfile::TempDir, FilterEngine) {
    let dir = tempfile::tempdir().unwrap();
    let installation = install(dir.path(), config);
    let engine = FilterEngine::new(installation.load_config().unwrap()).unwrap();
    (dir, engine)
}

#[test]
fn test_single_sender_match() {
    let (_dir, engine) = engine_for(
        r#"{ "search_for": [ { "name": "LI", "sender": ".*linkedin.*" } ], "inspect_x_last_emails": 10 }"#,
    );
    let notifier = RecordingNotifier::default();

    let sent = process_batch(
        &engine,
        &args(&["acct", "jobs@linkedin.com", "Unimed hiring"]),
        &notifier,
    )
    .unwrap();

    assert_eq!(sent, 1);
    assert_eq!(
        *notifier.seen.borrow(),
        vec![Notification {
            title: "Pattern: LI".to_string(),
            body: "Sender: jobs@linkedin.com \n\nUnimed hiring".to_string(),
        }]
    );
}

#[test]
fn test_both_fields_required() {
    let (_dir, engine) = engine_for(
        r#"{
            "search_for": [
                { "name": "LI Unimed", "sender": ".*linkedin.*", "subject": ".*unimed.*" }
            ],
            "inspect_x_last_emails": 10
        }"#,
    );
    let notifier = RecordingNotifier::default();

    let flat = args(&[
        "acct",
        "jobs@linkedin.com",
        "Generic message",
        "acct",
        "jobs@linkedin.com",
        "UNIMED is hiring",
    ]);
    assert_eq!(process_batch(&engine, &flat, &notifier).unwrap(), 1);
    assert_eq!(
        notifier.seen.borrow()[0].body,
        "Sender: jobs@linkedin.com \n\nUNIMED is hiring"
    );
}

#[test]
fn test_inspection_window() {
    let config = |n: usize| {
        format!(
            r#"{{ "search_for": [ {{ "name": "Unimed", "subject": "unimed" }} ], "inspect_x_last_emails": {n} }}"#
        )
    };
    let flat = args(&[
        "acct", "a@b.com", "Hello", "acct", "c@d.com", "Unimed hiring",
    ]);

    let (_dir, engine) = engine_for(&config(1));
    let notifier = RecordingNotifier::default();
    assert_eq!(process_batch(&engine, &flat, &notifier).unwrap(), 0);

    let (_dir, engine) = engine_for(&config(2));
    let notifier = RecordingNotifier::default();
    assert_eq!(process_batch(&engine, &flat, &notifier).unwrap(), 1);
}

#[test]
fn test_malformed_input_dispatches_nothing() {
    let (_dir, engine) = engine_for(
        r#"{ "search_for": [ { "name": "Any", "sender": "." } ], "inspect_x_last_emails": 10 }"#,
    );
    let notifier = RecordingNotifier::default();

    let result = process_batch(
        &engine,
        &args(&["acct", "a@b.com", "Hello", "acct"]),
        &notifier,
    );
    assert!(matches!(
        result,
        Err(NotifierError::MalformedInput { count: 4, field_count: 3 })
    ));
    assert!(notifier.seen.borrow().is_empty());
}

#[test]
fn test_invalid_regex_fails_before_matching() {
    let dir = tempfile::tempdir().unwrap();
    let installation = install(
        dir.path(),
        r#"{ "search_for": [ { "name": "Bad", "subject": "(" } ], "inspect_x_last_emails": 10 }"#,
    );

    let config = installation.load_config().unwrap();
    assert!(matches!(
        FilterEngine::new(config),
        Err(NotifierError::ConfigParse(_))
    ));
}
