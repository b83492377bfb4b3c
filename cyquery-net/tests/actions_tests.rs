// Tests for the canned service-app actions

use cyquery_net::actions::{
    LayoutBounds, add_networks, open_url, update_layouts, update_network, update_selection,
    update_tables,
};
use cyquery_net::cx2::{Cx2Edge, Cx2Network, Cx2Node};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn sample_network() -> Cx2Network {
    let mut network = Cx2Network::new();
    for i in 0..6 {
        network.add_node(Cx2Node::with_name(&format!("node {}", i)));
    }
    for i in 0..5 {
        network.add_edge(Cx2Edge::new(i, i + 1));
    }
    network
}

// ============================================================================
// Table Update Tests
// ============================================================================

#[test]
fn test_update_tables_covers_every_node() {
    let network = sample_network();
    let data = update_tables(&network, "test_col", "test_val", false);

    assert_eq!(data[0]["id"], "nodes");
    let rows = data[0]["rows"].as_object().unwrap();
    assert_eq!(rows.len(), 6);
    for (_, cells) in rows {
        assert_eq!(cells["test_col"], "test_val");
    }
}

#[test]
fn test_update_tables_declares_string_column() {
    let network = sample_network();
    let data = update_tables(&network, "score", "high", false);

    let columns = data[0]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0]["id"], "score");
    assert_eq!(columns[0]["type"], "string");
}

#[test]
fn test_update_tables_applies_to_edges() {
    let network = sample_network();
    let data = update_tables(&network, "test_col", "test_val", true);

    assert_eq!(data[0]["id"], "edges");
    assert_eq!(data[0]["rows"].as_object().unwrap().len(), 5);
}

// ============================================================================
// Network Tests
// ============================================================================

#[test]
fn test_add_networks_builds_two_node_one_edge_network() {
    let document = add_networks();
    let network = Cx2Network::from_value(&document).unwrap();

    assert_eq!(network.node_count(), 2);
    assert_eq!(network.edge_count(), 1);
    assert_eq!(network.nodes[&0].attributes["name"], "node 1");
    assert_eq!(network.nodes[&1].attributes["name"], "node 2");

    let edge = network.edges.values().next().unwrap();
    assert_eq!(edge.source, 0);
    assert_eq!(edge.target, 1);
}

#[test]
fn test_update_network_adds_one_node() {
    let mut network = sample_network();
    let document = update_network(&mut network);

    assert_eq!(network.node_count(), 7);
    assert_eq!(network.nodes[&6].attributes["name"], "added node");

    // The returned document reflects the mutation
    let reread = Cx2Network::from_value(&document).unwrap();
    assert_eq!(reread.node_count(), 7);
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_update_layouts_without_z() {
    let network = sample_network();
    let bounds = LayoutBounds::default();
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_layouts(&network, &bounds, &mut rng);
    let records = data.as_array().unwrap();
    assert_eq!(records.len(), 6);

    for record in records {
        let entry = record.as_object().unwrap();
        assert_eq!(entry.len(), 3);
        assert!(entry.contains_key("id"));
        let x = entry["x"].as_f64().unwrap();
        let y = entry["y"].as_f64().unwrap();
        assert!((0.0..=500.0).contains(&x));
        assert!((0.0..=500.0).contains(&y));
        assert!(!entry.contains_key("z"));
    }
}

#[test]
fn test_update_layouts_with_z_in_bounds() {
    let network = sample_network();
    let bounds = LayoutBounds {
        min_z: 100.0,
        max_z: 200.0,
        include_z: true,
        ..LayoutBounds::default()
    };
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_layouts(&network, &bounds, &mut rng);
    for record in data.as_array().unwrap() {
        let z = record["z"].as_f64().unwrap();
        assert!((100.0..=200.0).contains(&z));
    }
}

#[test]
fn test_update_layouts_tolerates_inverted_bounds() {
    let network = sample_network();
    let bounds = LayoutBounds {
        min_x: 100.0,
        max_x: 0.0,
        min_y: 50.0,
        max_y: -50.0,
        min_z: 200.0,
        max_z: 100.0,
        include_z: true,
    };
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_layouts(&network, &bounds, &mut rng);
    for record in data.as_array().unwrap() {
        assert!((0.0..=100.0).contains(&record["x"].as_f64().unwrap()));
        assert!((-50.0..=50.0).contains(&record["y"].as_f64().unwrap()));
        assert!((100.0..=200.0).contains(&record["z"].as_f64().unwrap()));
    }
}

#[test]
fn test_update_layouts_same_seed_same_coordinates() {
    let network = sample_network();
    let bounds = LayoutBounds::default();

    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);
    assert_eq!(
        update_layouts(&network, &bounds, &mut rng_a),
        update_layouts(&network, &bounds, &mut rng_b)
    );
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_update_selection_caps_at_max_select() {
    let network = sample_network();
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_selection(&network, 3, &mut rng);
    assert_eq!(data["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(data["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_update_selection_caps_at_population() {
    let network = sample_network();
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_selection(&network, 50, &mut rng);
    assert_eq!(data["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(data["edges"].as_array().unwrap().len(), 5);
}

#[test]
fn test_update_selection_picks_existing_ids() {
    let network = sample_network();
    let mut rng = SmallRng::seed_from_u64(7);

    let data = update_selection(&network, 4, &mut rng);
    for id in data["nodes"].as_array().unwrap() {
        assert!(network.nodes.contains_key(&id.as_i64().unwrap()));
    }
    for id in data["edges"].as_array().unwrap() {
        assert!(network.edges.contains_key(&id.as_i64().unwrap()));
    }
}

#[test]
fn test_update_selection_same_seed_same_subset() {
    let network = sample_network();

    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);
    assert_eq!(
        update_selection(&network, 3, &mut rng_a),
        update_selection(&network, 3, &mut rng_b)
    );
}

// ============================================================================
// Open URL Tests
// ============================================================================

#[test]
fn test_open_url_with_target() {
    let data = open_url("https://cytoscape.org", "_blank");
    assert_eq!(data["url"], "https://cytoscape.org");
    assert_eq!(data["target"], "_blank");
}

#[test]
fn test_open_url_suppresses_empty_target() {
    let data = open_url("https://cytoscape.org", "");
    assert!(data.get("target").is_none());
}

#[test]
fn test_open_url_suppresses_none_target() {
    assert!(open_url("https://cytoscape.org", "none").get("target").is_none());
    assert!(open_url("https://cytoscape.org", "None").get("target").is_none());
}
