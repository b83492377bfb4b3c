use crate::CLAP_STYLING;
use clap::{arg, value_parser};
use std::path::PathBuf;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("cyquery")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("cyquery")
        .styles(CLAP_STYLING)
        .about(
            "Runs gene enrichment against the iQuery integrated search service. \
            Takes a file with a comma delimited list of genes and reports the \
            network with the highest similarity score as a term in JSON format \
            on standard out. term_size is the number of nodes in the network, \
            NOT the number of genes.",
        )
        .arg(
            arg!(<input> "File containing a comma delimited list of genes")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"url" <URL>)
                .required(false)
                .help("Endpoint of the REST service")
                .value_parser(value_parser!(Url))
                .default_value("http://public.ndexbio.org"),
        )
        .arg(
            arg!(--"polling_interval" <SECONDS>)
                .required(false)
                .help("Time in seconds to wait between checks on task completion")
                .value_parser(value_parser!(f64))
                .default_value("1"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Timeout for http requests in seconds")
                .value_parser(value_parser!(u64))
                .default_value("30"),
        )
        .arg(
            arg!(--"retrycount" <COUNT>)
                .required(false)
                .help(
                    "Number of times to check for a completed request. This value \
                    times --polling_interval bounds how long the tool waits for a \
                    result",
                )
                .value_parser(value_parser!(u32))
                .default_value("180"),
        )
}
