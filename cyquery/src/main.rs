use commands::command_argument_builder;
use cyquery::query::run_query;
use cyquery_enrich::EnrichmentClient;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod commands;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays reserved for the JSON document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = command_argument_builder().get_matches();

    let input = matches.get_one::<PathBuf>("input").unwrap();
    let url = matches.get_one::<Url>("url").unwrap();
    let polling_interval = *matches.get_one::<f64>("polling_interval").unwrap();
    let timeout = *matches.get_one::<u64>("timeout").unwrap();
    let retrycount = *matches.get_one::<u32>("retrycount").unwrap();

    let client = EnrichmentClient::with_timeout(url, timeout)
        .with_polling_interval(polling_interval)
        .with_retry_count(retrycount);

    match run_query(input, &client).await {
        Ok(Some(term)) => match serde_json::to_string(&term) {
            Ok(document) => println!("{}", document),
            Err(e) => {
                eprintln!("Caught exception: {}", e);
                std::process::exit(2);
            }
        },
        Ok(None) => eprintln!("No terms found"),
        Err(e) => {
            eprintln!("Caught exception: {:#}", e);
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
