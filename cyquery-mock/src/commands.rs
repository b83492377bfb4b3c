use crate::CLAP_STYLING;
use clap::{arg, value_parser};
use cyquery_mock::run::MODE_NAMES;
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("cyquery-mock")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("cyquery-mock")
        .styles(CLAP_STYLING)
        .about(
            "Simulates a Cytoscape-Web service-app backend. Loads a CX2 network, \
            applies one canned transformation selected by --mode, and prints the \
            resulting action list as JSON on standard out.",
        )
        .arg(arg!(<input> "Network in CX2 format").value_parser(value_parser!(PathBuf)))
        .arg(
            arg!(--"mode" <MODE>)
                .required(false)
                .help("Transformation to run")
                .value_parser(MODE_NAMES)
                .default_value("updateTables"),
        )
        .arg(
            arg!(--"column_name" <NAME>)
                .required(false)
                .help("Column name for updateTables")
                .default_value("test_col"),
        )
        .arg(
            arg!(--"column_value" <VALUE>)
                .required(false)
                .help("Value written into every row of the new column")
                .default_value("test_val"),
        )
        .arg(
            arg!(--"apply_to_edges")
                .required(false)
                .help("Apply the table update to edges instead of nodes")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"min_x" <COORD>)
                .required(false)
                .help("Lower bound for random x coordinates")
                .value_parser(value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            arg!(--"max_x" <COORD>)
                .required(false)
                .help("Upper bound for random x coordinates")
                .value_parser(value_parser!(f64))
                .default_value("500"),
        )
        .arg(
            arg!(--"min_y" <COORD>)
                .required(false)
                .help("Lower bound for random y coordinates")
                .value_parser(value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            arg!(--"max_y" <COORD>)
                .required(false)
                .help("Upper bound for random y coordinates")
                .value_parser(value_parser!(f64))
                .default_value("500"),
        )
        .arg(
            arg!(--"min_z" <COORD>)
                .required(false)
                .help("Lower bound for random z coordinates")
                .value_parser(value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            arg!(--"max_z" <COORD>)
                .required(false)
                .help("Upper bound for random z coordinates")
                .value_parser(value_parser!(f64))
                .default_value("500"),
        )
        .arg(
            arg!(--"include_zcoord")
                .required(false)
                .help("Include a z coordinate in layout records")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"max_select" <COUNT>)
                .required(false)
                .help("Maximum number of nodes and of edges in a selection")
                .value_parser(value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            arg!(--"random_seed" <SEED>)
                .required(false)
                .help("Seed for the random number source, for reproducible output")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--"sleep_time" <SECONDS>)
                .required(false)
                .help("Seconds to sleep before doing anything, to simulate a slow job")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            arg!(--"error_message" <MESSAGE>)
                .required(false)
                .help("Print this message to standard error and exit with code 1"),
        )
        .arg(
            arg!(--"openurl" <URL>)
                .required(false)
                .help("URL returned by the openURL mode")
                .default_value("https://cytoscape.org"),
        )
        .arg(
            arg!(--"openurltarget" <TARGET>)
                .required(false)
                .help("Window target for openURL; empty or 'none' omits it")
                .default_value(""),
        )
}
