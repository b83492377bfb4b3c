// Minimal CX2 reader/writer for the aspects the fixture needs.

use crate::error::{NetError, Result};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::path::Path;

pub const CX_VERSION: &str = "2.0";

#[derive(Debug, Clone, Default)]
pub struct Cx2Node {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub attributes: Map<String, Value>,
}

impl Cx2Node {
    pub fn with_name(name: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::String(name.to_string()));
        Self {
            attributes,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cx2Edge {
    pub source: i64,
    pub target: i64,
    pub attributes: Map<String, Value>,
}

impl Cx2Edge {
    pub fn new(source: i64, target: i64) -> Self {
        Self {
            source,
            target,
            attributes: Map::new(),
        }
    }
}

/// In-memory CX2 network.
///
/// Nodes and edges are keyed by id in `BTreeMap`s so iteration order is
/// stable, which keeps seeded fixture runs reproducible. Aspects this
/// model does not interpret are preserved opaquely and re-emitted on
/// serialization; `metaData` and `status` are regenerated on write.
#[derive(Debug, Clone, Default)]
pub struct Cx2Network {
    pub nodes: BTreeMap<i64, Cx2Node>,
    pub edges: BTreeMap<i64, Cx2Edge>,
    pub attribute_declarations: Option<Value>,
    pub network_attributes: Option<Value>,
    pub opaque_aspects: Vec<(String, Value)>,
}

impl Cx2Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Self::from_value(&document)
    }

    /// Parses a CX2 document: a JSON array of single-key aspect objects,
    /// optionally led by a `CXVersion` preamble. Duplicate element ids
    /// resolve to the last occurrence.
    pub fn from_value(document: &Value) -> Result<Self> {
        let aspects = document
            .as_array()
            .ok_or_else(|| NetError::Malformed("document must be a JSON array".to_string()))?;

        let mut network = Self::new();
        for aspect in aspects {
            let entry = aspect
                .as_object()
                .ok_or_else(|| NetError::Malformed("aspect must be a JSON object".to_string()))?;
            for (name, body) in entry {
                match name.as_str() {
                    // Preamble and bookkeeping aspects are regenerated on write
                    "CXVersion" | "hasFragments" | "metaData" | "status" => {}
                    "nodes" => network.parse_nodes(body)?,
                    "edges" => network.parse_edges(body)?,
                    "attributeDeclarations" => {
                        network.attribute_declarations = Some(body.clone());
                    }
                    "networkAttributes" => {
                        network.network_attributes = Some(body.clone());
                    }
                    other => {
                        network
                            .opaque_aspects
                            .push((other.to_string(), body.clone()));
                    }
                }
            }
        }
        Ok(network)
    }

    fn parse_nodes(&mut self, body: &Value) -> Result<()> {
        let entries = body
            .as_array()
            .ok_or_else(|| NetError::Malformed("nodes aspect must be an array".to_string()))?;
        for entry in entries {
            let id = entry
                .get("id")
                .and_then(Value::as_i64)
                .ok_or_else(|| NetError::Malformed("node missing integer id".to_string()))?;
            self.nodes.insert(
                id,
                Cx2Node {
                    x: entry.get("x").and_then(Value::as_f64),
                    y: entry.get("y").and_then(Value::as_f64),
                    z: entry.get("z").and_then(Value::as_f64),
                    attributes: entry
                        .get("v")
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default(),
                },
            );
        }
        Ok(())
    }

    fn parse_edges(&mut self, body: &Value) -> Result<()> {
        let entries = body
            .as_array()
            .ok_or_else(|| NetError::Malformed("edges aspect must be an array".to_string()))?;
        for entry in entries {
            let id = entry
                .get("id")
                .and_then(Value::as_i64)
                .ok_or_else(|| NetError::Malformed("edge missing integer id".to_string()))?;
            let source = entry
                .get("s")
                .and_then(Value::as_i64)
                .ok_or_else(|| NetError::Malformed("edge missing source".to_string()))?;
            let target = entry
                .get("t")
                .and_then(Value::as_i64)
                .ok_or_else(|| NetError::Malformed("edge missing target".to_string()))?;
            self.edges.insert(
                id,
                Cx2Edge {
                    source,
                    target,
                    attributes: entry
                        .get("v")
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default(),
                },
            );
        }
        Ok(())
    }

    /// Adds a node under the next free id and returns that id.
    pub fn add_node(&mut self, node: Cx2Node) -> i64 {
        let id = self.next_id(&self.nodes.last_key_value().map(|(id, _)| *id));
        self.nodes.insert(id, node);
        id
    }

    /// Adds an edge under the next free id and returns that id.
    pub fn add_edge(&mut self, edge: Cx2Edge) -> i64 {
        let id = self.next_id(&self.edges.last_key_value().map(|(id, _)| *id));
        self.edges.insert(id, edge);
        id
    }

    fn next_id(&self, highest: &Option<i64>) -> i64 {
        highest.map(|id| id + 1).unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serializes the network back to a CX2 document.
    pub fn to_cx2(&self) -> Value {
        let mut meta = vec![
            json!({"name": "nodes", "elementCount": self.nodes.len()}),
            json!({"name": "edges", "elementCount": self.edges.len()}),
        ];
        if self.attribute_declarations.is_some() {
            meta.push(json!({"name": "attributeDeclarations", "elementCount": 1}));
        }
        if self.network_attributes.is_some() {
            meta.push(json!({"name": "networkAttributes", "elementCount": 1}));
        }
        for (name, _) in &self.opaque_aspects {
            meta.push(json!({"name": name}));
        }

        let mut aspects = vec![
            json!({"CXVersion": CX_VERSION, "hasFragments": false}),
            json!({"metaData": meta}),
        ];
        if let Some(declarations) = &self.attribute_declarations {
            aspects.push(json!({"attributeDeclarations": declarations}));
        }
        if let Some(attributes) = &self.network_attributes {
            aspects.push(json!({"networkAttributes": attributes}));
        }
        aspects.push(json!({
            "nodes": self
                .nodes
                .iter()
                .map(|(id, node)| node_entry(*id, node))
                .collect::<Vec<_>>()
        }));
        aspects.push(json!({
            "edges": self
                .edges
                .iter()
                .map(|(id, edge)| edge_entry(*id, edge))
                .collect::<Vec<_>>()
        }));
        for (name, body) in &self.opaque_aspects {
            let mut aspect = Map::new();
            aspect.insert(name.clone(), body.clone());
            aspects.push(Value::Object(aspect));
        }
        aspects.push(json!({"status": [{"success": true}]}));

        Value::Array(aspects)
    }
}

fn node_entry(id: i64, node: &Cx2Node) -> Value {
    let mut entry = Map::new();
    entry.insert("id".to_string(), json!(id));
    if let Some(x) = node.x {
        entry.insert("x".to_string(), json!(x));
    }
    if let Some(y) = node.y {
        entry.insert("y".to_string(), json!(y));
    }
    if let Some(z) = node.z {
        entry.insert("z".to_string(), json!(z));
    }
    if !node.attributes.is_empty() {
        entry.insert("v".to_string(), Value::Object(node.attributes.clone()));
    }
    Value::Object(entry)
}

fn edge_entry(id: i64, edge: &Cx2Edge) -> Value {
    let mut entry = Map::new();
    entry.insert("id".to_string(), json!(id));
    entry.insert("s".to_string(), json!(edge.source));
    entry.insert("t".to_string(), json!(edge.target));
    if !edge.attributes.is_empty() {
        entry.insert("v".to_string(), Value::Object(edge.attributes.clone()));
    }
    Value::Object(entry)
}
