// Canned service-app actions used to fake a backend during UI tests.

use crate::cx2::{Cx2Edge, Cx2Network, Cx2Node};
use rand::Rng;
use rand::rngs::SmallRng;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

/// One tagged entry in a service-app response. A full response is a
/// JSON array of these.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceAction {
    pub action: String,
    pub data: Value,
}

impl ServiceAction {
    pub fn new(action: &str, data: Value) -> Self {
        Self {
            action: action.to_string(),
            data,
        }
    }
}

/// Coordinate ranges for randomized layouts.
#[derive(Debug, Clone, Copy)]
pub struct LayoutBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub include_z: bool,
}

impl Default for LayoutBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 500.0,
            min_y: 0.0,
            max_y: 500.0,
            min_z: 0.0,
            max_z: 500.0,
            include_z: false,
        }
    }
}

/// Builds a table update that adds one string column with a constant
/// value to every node, or to every edge when `apply_to_edges` is set.
pub fn update_tables(
    network: &Cx2Network,
    column_name: &str,
    column_value: &str,
    apply_to_edges: bool,
) -> Value {
    let (aspect, ids): (&str, Vec<i64>) = if apply_to_edges {
        ("edges", network.edges.keys().copied().collect())
    } else {
        ("nodes", network.nodes.keys().copied().collect())
    };

    let mut rows = Map::new();
    for id in ids {
        let mut cells = Map::new();
        cells.insert(
            column_name.to_string(),
            Value::String(column_value.to_string()),
        );
        rows.insert(id.to_string(), Value::Object(cells));
    }

    json!([{
        "id": aspect,
        "columns": [{"id": column_name, "type": "string"}],
        "rows": rows,
    }])
}

/// Builds a brand-new two-node one-edge network.
pub fn add_networks() -> Value {
    let mut network = Cx2Network::new();
    network.attribute_declarations = Some(json!({"nodes": {"name": {"d": "string"}}}));
    let first = network.add_node(Cx2Node::with_name("node 1"));
    let second = network.add_node(Cx2Node::with_name("node 2"));
    network.add_edge(Cx2Edge::new(first, second));
    network.to_cx2()
}

/// Adds one node to the loaded network and returns the whole network.
pub fn update_network(network: &mut Cx2Network) -> Value {
    let id = network.add_node(Cx2Node::with_name("added node"));
    debug!("Added node {} to network", id);
    network.to_cx2()
}

/// Assigns random coordinates within the configured bounds to every
/// node. `z` appears in the records only when the bounds ask for it.
/// Inverted bounds on an axis are swapped rather than rejected.
pub fn update_layouts(network: &Cx2Network, bounds: &LayoutBounds, rng: &mut SmallRng) -> Value {
    let mut records = Vec::with_capacity(network.node_count());
    for id in network.nodes.keys() {
        let mut record = Map::new();
        record.insert("id".to_string(), json!(id));
        record.insert(
            "x".to_string(),
            json!(sample_axis(bounds.min_x, bounds.max_x, rng)),
        );
        record.insert(
            "y".to_string(),
            json!(sample_axis(bounds.min_y, bounds.max_y, rng)),
        );
        if bounds.include_z {
            record.insert(
                "z".to_string(),
                json!(sample_axis(bounds.min_z, bounds.max_z, rng)),
            );
        }
        records.push(Value::Object(record));
    }
    Value::Array(records)
}

fn sample_axis(min: f64, max: f64, rng: &mut SmallRng) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Picks a random subset of node and edge ids, each capped at
/// `max_select` elements.
pub fn update_selection(network: &Cx2Network, max_select: usize, rng: &mut SmallRng) -> Value {
    let nodes = sample_ids(network.nodes.keys().copied().collect(), max_select, rng);
    let edges = sample_ids(network.edges.keys().copied().collect(), max_select, rng);
    json!({"nodes": nodes, "edges": edges})
}

fn sample_ids(ids: Vec<i64>, max_select: usize, rng: &mut SmallRng) -> Vec<i64> {
    let amount = max_select.min(ids.len());
    rand::seq::index::sample(rng, ids.len(), amount)
        .iter()
        .map(|index| ids[index])
        .collect()
}

/// Builds a static open-URL instruction. The `target` is suppressed
/// when empty or "none" (case-insensitive).
pub fn open_url(url: &str, target: &str) -> Value {
    let mut entry = Map::new();
    entry.insert("url".to_string(), Value::String(url.to_string()));
    if !target.is_empty() && !target.eq_ignore_ascii_case("none") {
        entry.insert("target".to_string(), Value::String(target.to_string()));
    }
    Value::Object(entry)
}
