use commands::command_argument_builder;
use cyquery_mock::run::{FixtureOptions, run_fixture};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

fn main() {
    // Log to stderr so stdout stays reserved for the JSON document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = command_argument_builder().get_matches();

    let sleep_time = *matches.get_one::<u64>("sleep_time").unwrap();
    if sleep_time > 0 {
        thread::sleep(Duration::from_secs(sleep_time));
    }

    // Synthetic-failure injection point for upstream tests
    if let Some(message) = matches.get_one::<String>("error_message") {
        eprintln!("{}", message);
        std::process::exit(1);
    }

    let input = matches.get_one::<PathBuf>("input").unwrap();
    let options = FixtureOptions::from_matches(&matches);

    match run_fixture(input, &options) {
        Ok(actions) => match serde_json::to_string_pretty(&actions) {
            Ok(document) => println!("{}", document),
            Err(e) => {
                eprintln!("Caught exception: {}", e);
                std::process::exit(2);
            }
        },
        Err(e) => {
            eprintln!("Caught exception: {}", e);
            std::process::exit(2);
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
