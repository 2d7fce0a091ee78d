//! Canonical page URL agreement across the JSON-LD nodes of one engine page.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use super::urls::strip_fragment;
use crate::domain::jsonld::{reference_id, Graph, GraphNode, NodeType};
use serde_json::Value;
use std::collections::HashMap;

/// One URL that claims to be the page's canonical address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCandidate {
    /// Human-readable field name, e.g. `Dataset.url`.
    pub field: &'static str,
    pub path: JsonPath,
    pub raw: String,
}

impl CanonicalCandidate {
    pub fn resolved(&self) -> &str {
        strip_fragment(&self.raw)
    }
}

/// Collects candidates in a fixed order; ties in the agreement vote go to earlier fields.
pub fn collect_candidates(engine: &Value, path: &JsonPath) -> Vec<CanonicalCandidate> {
    let graph_path = path.key("schema").key("@graph");
    let graph = Graph::of_engine(engine);
    let mut out = Vec::new();

    let mut push = |field: &'static str, path: JsonPath, raw: Option<&str>| {
        if let Some(raw) = raw {
            out.push(CanonicalCandidate {
                field,
                path,
                raw: raw.to_string(),
            });
        }
    };

    if let Some(page) = graph.first(NodeType::WebPage) {
        let node_path = graph_path.index(page.index);
        push("WebPage.url", node_path.key("url"), page.str_field("url"));
        push("WebPage.@id", node_path.key("@id"), page.id());
        if let Some((crumb_path, crumb)) = breadcrumb_target(&graph, page, &node_path, &graph_path) {
            push("WebPage.breadcrumb", crumb_path, Some(crumb));
        }
    }
    if let Some(article) = graph.first(NodeType::Article) {
        let node_path = graph_path.index(article.index).key("mainEntityOfPage");
        let raw = article.value.get("mainEntityOfPage").and_then(reference_id);
        let field_path = match article.value.get("mainEntityOfPage") {
            Some(Value::Object(_)) => node_path.key("@id"),
            _ => node_path,
        };
        push("Article.mainEntityOfPage.@id", field_path, raw);
    }
    if let Some(dataset) = graph.first(NodeType::Dataset) {
        push(
            "Dataset.url",
            graph_path.index(dataset.index).key("url"),
            dataset.str_field("url"),
        );
    }
    out
}

/// The breadcrumb's final crumb is the page itself. `breadcrumb` may be inline, a reference to
/// a `BreadcrumbList` node in the graph, or a bare `@id` on the page URL.
fn breadcrumb_target<'a>(
    graph: &Graph<'a>,
    page: GraphNode<'a>,
    page_path: &JsonPath,
    graph_path: &JsonPath,
) -> Option<(JsonPath, &'a str)> {
    let crumb = page.value.get("breadcrumb")?;
    let crumb_path = page_path.key("breadcrumb");

    if let Some(found) = last_crumb(crumb, &crumb_path) {
        return Some(found);
    }
    let id = reference_id(crumb)?;
    if let Some(list) = graph.by_id(id) {
        if let Some(found) = last_crumb(list.value, &graph_path.index(list.index)) {
            return Some(found);
        }
    }
    let id_path = if crumb.is_object() {
        crumb_path.key("@id")
    } else {
        crumb_path
    };
    Some((id_path, id))
}

fn last_crumb<'a>(list: &'a Value, path: &JsonPath) -> Option<(JsonPath, &'a str)> {
    let items = list.get("itemListElement")?.as_array()?;
    let (i, last) = items
        .iter()
        .enumerate()
        .max_by_key(|(i, item)| {
            item.get("position")
                .and_then(Value::as_u64)
                .unwrap_or(*i as u64)
        })?;
    let item = last.get("item")?;
    let item_path = path.key("itemListElement").index(i).key("item");
    match item {
        Value::String(s) => Some((item_path, s.as_str())),
        Value::Object(map) => map
            .get("@id")
            .and_then(Value::as_str)
            .map(|s| (item_path.key("@id"), s)),
        _ => None,
    }
}

/// Every canonical-URL field of the page must resolve to the same URL once `#fragment`s are
/// dropped. Each divergent field yields one error naming it and the reference field.
pub fn cross_check_url_canonical_agreement(engine: &Value, path: &JsonPath) -> ValidationResult {
    let mut out = ValidationResult::new();
    let candidates = collect_candidates(engine, path);
    if candidates.len() < 2 {
        return out;
    }

    let mut votes: HashMap<&str, usize> = HashMap::new();
    for c in &candidates {
        *votes.entry(c.resolved()).or_insert(0) += 1;
    }
    // Strictly-greater keeps the earliest field on ties.
    let mut reference = &candidates[0];
    for c in &candidates[1..] {
        if votes[c.resolved()] > votes[reference.resolved()] {
            reference = c;
        }
    }

    for c in &candidates {
        if c.resolved() == reference.resolved() {
            continue;
        }
        out.error(
            Category::ContentInconsistency,
            &c.path,
            format!(
                "{} resolves to '{}' but {} resolves to '{}'",
                c.field,
                c.resolved(),
                reference.field,
                reference.resolved()
            ),
        );
    }
    out
}
