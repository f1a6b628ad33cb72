use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use mail_notifier::installation::{Installation, DEFAULT_ROOT};
use mail_notifier::notifier::{DesktopNotifier, DryRunNotifier, Notifier};
use mail_notifier::pipeline::{process_batch, strip_count_prefix};
use mail_notifier::{Config, FilterEngine};
use std::process;

fn cli() -> Command {
    Command::new("mail-notifier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Desktop notifications for new emails matching your patterns")
        .long_about(
            "Matches a batch of new emails against the patterns in config.json and\n\
             shows a desktop notification for every match.\n\n\
             Emails are passed as a flat list: ACCOUNT SENDER SUBJECT [ACCOUNT SENDER SUBJECT ...]\n\
             Put -- before the emails so none of them is read as an option.",
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .env("MAIL_NOTIFIER_ROOT")
                .help("Installation directory holding config.json and assets/")
                .default_value(DEFAULT_ROOT),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging for every pattern evaluation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print notifications instead of showing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the installation and configuration, then exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write an example configuration file and exit")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("count-prefixed")
                .long("count-prefixed")
                .help("The first email argument is the number of new emails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emails")
                .value_name("EMAILS")
                .help("Flat list of account, sender and subject for each new email (after --)")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

fn main() {
    let matches = cli().get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let installation = match matches.get_one::<String>("root") {
        Some(root) => Installation::new(root),
        None => Installation::default(),
    };

    let config = match installation.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let engine = match FilterEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("test-config") {
        println!("Installation: {}", installation.root().display());
        println!("Number of patterns: {}", engine.pattern_names().count());
        for (i, name) in engine.pattern_names().enumerate() {
            println!("  Pattern {}: {}", i + 1, name);
        }
        println!("All regex patterns compiled successfully.");
        return;
    }

    let args: Vec<String> = matches
        .get_many::<String>("emails")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let emails = if matches.get_flag("count-prefixed") {
        strip_count_prefix(&args)
    } else {
        &args[..]
    };

    let notifier: Box<dyn Notifier> = if matches.get_flag("dry-run") {
        Box::new(DryRunNotifier)
    } else {
        Box::new(DesktopNotifier::new(installation.sound_path()))
    };

    if let Err(e) = process_batch(&engine, emails, notifier.as_ref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
