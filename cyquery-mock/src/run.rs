use clap::ArgMatches;
use cyquery_net::actions::{
    LayoutBounds, ServiceAction, add_networks, open_url, update_layouts, update_network,
    update_selection, update_tables,
};
use cyquery_net::cx2::Cx2Network;
use cyquery_net::error::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::Path;
use tracing::debug;

pub const MODE_NAMES: [&str; 7] = [
    "updateTables",
    "addNetworks",
    "updateNetwork",
    "updateLayouts",
    "updateSelection",
    "openURL",
    "updateLayoutsAndSelection",
];

/// The canned transformation to run, selected by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    UpdateTables,
    AddNetworks,
    UpdateNetwork,
    UpdateLayouts,
    UpdateSelection,
    OpenUrl,
    UpdateLayoutsAndSelection,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "updateTables" => Some(Mode::UpdateTables),
            "addNetworks" => Some(Mode::AddNetworks),
            "updateNetwork" => Some(Mode::UpdateNetwork),
            "updateLayouts" => Some(Mode::UpdateLayouts),
            "updateSelection" => Some(Mode::UpdateSelection),
            "openURL" => Some(Mode::OpenUrl),
            "updateLayoutsAndSelection" => Some(Mode::UpdateLayoutsAndSelection),
            _ => None,
        }
    }
}

/// Options for one fixture invocation
#[derive(Debug, Clone)]
pub struct FixtureOptions {
    pub mode: Mode,
    pub column_name: String,
    pub column_value: String,
    pub apply_to_edges: bool,
    pub bounds: LayoutBounds,
    pub max_select: usize,
    pub random_seed: Option<u64>,
    pub open_url: String,
    pub open_url_target: String,
}

impl FixtureOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mode = matches.get_one::<String>("mode").unwrap();
        Self {
            mode: Mode::from_str(mode).expect("clap limits --mode to known values"),
            column_name: matches.get_one::<String>("column_name").unwrap().clone(),
            column_value: matches.get_one::<String>("column_value").unwrap().clone(),
            apply_to_edges: matches.get_flag("apply_to_edges"),
            bounds: LayoutBounds {
                min_x: *matches.get_one::<f64>("min_x").unwrap(),
                max_x: *matches.get_one::<f64>("max_x").unwrap(),
                min_y: *matches.get_one::<f64>("min_y").unwrap(),
                max_y: *matches.get_one::<f64>("max_y").unwrap(),
                min_z: *matches.get_one::<f64>("min_z").unwrap(),
                max_z: *matches.get_one::<f64>("max_z").unwrap(),
                include_z: matches.get_flag("include_zcoord"),
            },
            max_select: *matches.get_one::<usize>("max_select").unwrap(),
            random_seed: matches.get_one::<u64>("random_seed").copied(),
            open_url: matches.get_one::<String>("openurl").unwrap().clone(),
            open_url_target: matches.get_one::<String>("openurltarget").unwrap().clone(),
        }
    }
}

/// Runs the selected transformation and returns the action envelopes
/// to print.
///
/// Every mode except `openURL` loads the network from `input` first, so
/// an unreadable or malformed file fails the run. `openURL` never touches
/// the input.
pub fn run_fixture(input: &Path, options: &FixtureOptions) -> Result<Vec<ServiceAction>> {
    let mut rng = match options.random_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    if options.mode == Mode::OpenUrl {
        return Ok(vec![ServiceAction::new(
            "openURL",
            open_url(&options.open_url, &options.open_url_target),
        )]);
    }

    let mut network = Cx2Network::from_path(input)?;
    debug!(
        "Loaded network with {} nodes and {} edges",
        network.node_count(),
        network.edge_count()
    );

    let actions = match options.mode {
        Mode::UpdateTables => vec![ServiceAction::new(
            "updateTables",
            update_tables(
                &network,
                &options.column_name,
                &options.column_value,
                options.apply_to_edges,
            ),
        )],
        Mode::AddNetworks => vec![ServiceAction::new("addNetworks", add_networks())],
        Mode::UpdateNetwork => {
            vec![ServiceAction::new("updateNetwork", update_network(&mut network))]
        }
        Mode::UpdateLayouts => vec![ServiceAction::new(
            "updateLayouts",
            update_layouts(&network, &options.bounds, &mut rng),
        )],
        Mode::UpdateSelection => vec![ServiceAction::new(
            "updateSelection",
            update_selection(&network, options.max_select, &mut rng),
        )],
        Mode::UpdateLayoutsAndSelection => vec![
            ServiceAction::new(
                "updateLayouts",
                update_layouts(&network, &options.bounds, &mut rng),
            ),
            ServiceAction::new(
                "updateSelection",
                update_selection(&network, options.max_select, &mut rng),
            ),
        ],
        Mode::OpenUrl => unreachable!("handled before the network is loaded"),
    };

    Ok(actions)
}
