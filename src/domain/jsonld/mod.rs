//! Read-only view over an engine page's `schema.@graph`.
//!
//! Graph nodes stay as `serde_json::Value`: content files carry arbitrary schema.org
//! attributes and the validator must report on them, not reject them at parse time.

use serde_json::Value;
use std::fmt;

pub mod faq_page;

pub use faq_page::{derive_faq_page, derive_main_entity, sync_faq_schema, SyncOutcome};

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// The schema.org node types an engine page graph is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    WebPage,
    WebSite,
    Article,
    VehicleEngine,
    Dataset,
    FaqPage,
}

impl NodeType {
    pub const ALL: [NodeType; 6] = [
        NodeType::WebPage,
        NodeType::WebSite,
        NodeType::Article,
        NodeType::VehicleEngine,
        NodeType::Dataset,
        NodeType::FaqPage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::WebPage => "WebPage",
            NodeType::WebSite => "WebSite",
            NodeType::Article => "Article",
            NodeType::VehicleEngine => "VehicleEngine",
            NodeType::Dataset => "Dataset",
            NodeType::FaqPage => "FAQPage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NodeType::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of `@graph` together with its position.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode<'a> {
    pub index: usize,
    pub value: &'a Value,
}

impl<'a> GraphNode<'a> {
    /// `@type` may be a string or an array of strings.
    pub fn type_names(&self) -> Vec<&'a str> {
        match self.value.get("@type") {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is(&self, node_type: NodeType) -> bool {
        self.type_names().contains(&node_type.as_str())
    }

    pub fn str_field(&self, name: &str) -> Option<&'a str> {
        self.value.get(name).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&'a str> {
        self.str_field("@id")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph<'a> {
    nodes: Vec<GraphNode<'a>>,
}

impl<'a> Graph<'a> {
    /// Builds the view from an engine page value (`engine.schema.@graph`).
    /// Returns an empty graph when the structure is absent; shape problems are reported
    /// by the schema pass.
    pub fn of_engine(engine: &'a Value) -> Self {
        engine
            .get("schema")
            .map(Graph::of_schema)
            .unwrap_or_default()
    }

    pub fn of_schema(schema: &'a Value) -> Self {
        schema
            .get("@graph")
            .and_then(Value::as_array)
            .map(|items| Graph::from_nodes(items))
            .unwrap_or_default()
    }

    /// Non-object items are skipped but keep their index slot.
    pub fn from_nodes(items: &'a [Value]) -> Self {
        let nodes = items
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_object())
            .map(|(index, value)| GraphNode { index, value })
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[GraphNode<'a>] {
        &self.nodes
    }

    pub fn of_type(&self, node_type: NodeType) -> Vec<GraphNode<'a>> {
        self.nodes
            .iter()
            .copied()
            .filter(|n| n.is(node_type))
            .collect()
    }

    pub fn first(&self, node_type: NodeType) -> Option<GraphNode<'a>> {
        self.nodes.iter().copied().find(|n| n.is(node_type))
    }

    pub fn by_id(&self, id: &str) -> Option<GraphNode<'a>> {
        self.nodes.iter().copied().find(|n| n.id() == Some(id))
    }
}

/// Resolves a schema.org reference: a plain string or an object carrying `@id`.
pub fn reference_id(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("@id").and_then(Value::as_str),
        _ => None,
    }
}
