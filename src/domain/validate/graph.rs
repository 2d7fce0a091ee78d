//! JSON-LD pass: `@context`, `@graph` and the attribute sets of known schema.org types.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use super::schema;
use super::shape::{self, parse_schema_date, Field, Shape};
use crate::domain::jsonld::{Graph, NodeType, SCHEMA_ORG_CONTEXT};
use serde_json::Value;

fn fields_for(node_type: NodeType) -> &'static [Field] {
    match node_type {
        NodeType::WebPage => schema::WEB_PAGE,
        NodeType::WebSite => schema::WEB_SITE,
        NodeType::Article => schema::ARTICLE,
        NodeType::VehicleEngine => schema::VEHICLE_ENGINE,
        NodeType::Dataset => schema::DATASET,
        NodeType::FaqPage => schema::FAQ_PAGE,
    }
}

/// Node types whose absence is reported here. `VehicleEngine` and `FAQPage` are
/// reported by their cross-checks, which know whether the absence matters.
const EXPECTED_HERE: [NodeType; 4] = [
    NodeType::WebPage,
    NodeType::WebSite,
    NodeType::Article,
    NodeType::Dataset,
];

/// Checks `schema` (an engine page's JSON-LD object) located at `path`.
pub fn check_schema(schema_value: &Value, path: &JsonPath, out: &mut ValidationResult) {
    if !schema_value.is_object() {
        // Reported by the engine shape pass.
        return;
    }
    shape::check(schema_value, &Shape::Record(schema::SCHEMA_ROOT), path, out);

    if let Some(context) = schema_value.get("@context").and_then(Value::as_str) {
        let normalized = context.trim_end_matches('/').replacen("http://", "https://", 1);
        if normalized != SCHEMA_ORG_CONTEXT {
            out.warning(
                Category::ContentQualityWarning,
                path.key("@context"),
                format!("@context is '{}', expected '{}'", context, SCHEMA_ORG_CONTEXT),
            );
        }
    }

    if !schema_value.get("@graph").is_some_and(Value::is_array) {
        // Reported by the root shape check above.
        return;
    }
    let graph = Graph::of_schema(schema_value);
    let graph_path = path.key("@graph");

    for node in graph.nodes() {
        let node_path = graph_path.index(node.index);
        if let Some(problem) = type_problem(node.value.get("@type")) {
            out.error(Category::SchemaViolation, node_path.key("@type"), problem);
            continue;
        }
        for node_type in node.type_names().into_iter().filter_map(NodeType::from_name) {
            shape::check(node.value, &Shape::Record(fields_for(node_type)), &node_path, out);
            if node_type == NodeType::Article {
                check_article_dates(node.value, &node_path, out);
            }
        }
    }

    for node_type in EXPECTED_HERE {
        if graph.first(node_type).is_none() {
            out.warning(
                Category::ContentQualityWarning,
                &graph_path,
                format!("@graph has no {} node", node_type),
            );
        }
    }
}

/// `@type` must be a string or a non-empty array of strings.
fn type_problem(raw: Option<&Value>) -> Option<String> {
    match raw {
        None => Some("missing required field `@type`".to_string()),
        Some(Value::String(_)) => None,
        Some(Value::Array(values)) if !values.is_empty() && values.iter().all(Value::is_string) => None,
        Some(other) => Some(format!(
            "expected string or array of strings, found {}",
            shape::json_type_name(other)
        )),
    }
}

fn check_article_dates(article: &Value, path: &JsonPath, out: &mut ValidationResult) {
    let published = article
        .get("datePublished")
        .and_then(Value::as_str)
        .and_then(parse_schema_date);
    let modified = article
        .get("dateModified")
        .and_then(Value::as_str)
        .and_then(parse_schema_date);
    if let (Some(published), Some(modified)) = (published, modified) {
        if modified < published {
            out.warning(
                Category::ContentQualityWarning,
                path.key("dateModified"),
                format!("dateModified {} is earlier than datePublished {}", modified, published),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::findings::Severity;
    use serde_json::json;

    fn full_graph() -> Value {
        json!({
            "@context": "https://schema.org",
            "@graph": [
                { "@type": "WebPage", "@id": "https://a.com/p#webpage", "url": "https://a.com/p", "name": "P" },
                { "@type": "WebSite", "@id": "https://a.com/#website", "url": "https://a.com/", "name": "A" },
                {
                    "@type": "Article",
                    "headline": "H",
                    "mainEntityOfPage": { "@id": "https://a.com/p#webpage" },
                    "author": { "@type": "Organization", "name": "A" },
                    "publisher": { "@type": "Organization", "name": "A", "logo": { "@type": "ImageObject", "url": "https://a.com/logo.png" } },
                    "datePublished": "2024-01-10",
                    "dateModified": "2024-02-01"
                },
                { "@type": "VehicleEngine", "identifier": "4EE1", "name": "Isuzu 4EE1" },
                { "@type": "Dataset", "name": "D", "description": "d", "url": "https://a.com/p" },
                { "@type": "FAQPage", "mainEntity": [] }
            ]
        })
    }

    #[test]
    fn complete_graph_is_clean() {
        let mut out = ValidationResult::new();
        check_schema(&full_graph(), &JsonPath::root().key("schema"), &mut out);
        assert!(out.is_empty(), "{:?}", out);
    }

    #[test]
    fn node_without_type_is_an_error() {
        let mut value = full_graph();
        value["@graph"][1].as_object_mut().unwrap().remove("@type");
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.count(Severity::Error), 1);
        assert_eq!(out.errors().next().unwrap().path, "schema.@graph[1].@type");
        // The WebSite node is gone as far as typing goes.
        assert_eq!(out.count(Severity::Warning), 1);
    }

    #[test]
    fn multi_typed_nodes_are_checked_per_known_type() {
        let mut value = full_graph();
        value["@graph"][2]["@type"] = json!(["Article", "TechArticle"]);
        value["@graph"][2].as_object_mut().unwrap().remove("headline");
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.len(), 1, "{:?}", out);
        assert_eq!(out.findings()[0].path, "schema.@graph[2].headline");

        value["@graph"][2]["@type"] = json!(["Article", 7]);
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.count(Severity::Error), 1);
        assert_eq!(out.errors().next().unwrap().path, "schema.@graph[2].@type");
    }

    #[test]
    fn article_dates_are_checked() {
        let mut value = full_graph();
        value["@graph"][2]["dateModified"] = json!("2023-12-01");
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.count(Severity::Warning), 1);
        assert!(out.findings()[0].message.contains("earlier than"));

        value["@graph"][2]["datePublished"] = json!("last spring");
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.findings()[0].path, "schema.@graph[2].datePublished");
    }

    #[test]
    fn question_type_literal_is_enforced() {
        let mut value = full_graph();
        value["@graph"][5]["mainEntity"] = json!([
            { "@type": "Questions", "name": "q", "acceptedAnswer": { "@type": "Answer", "text": "a" } }
        ]);
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.count(Severity::Error), 1);
        assert_eq!(out.findings()[0].path, "schema.@graph[5].mainEntity[0].@type");
    }

    #[test]
    fn foreign_context_is_a_warning() {
        let mut value = full_graph();
        value["@context"] = json!("https://example.org/vocab");
        let mut out = ValidationResult::new();
        check_schema(&value, &JsonPath::root().key("schema"), &mut out);
        assert_eq!(out.count(Severity::Warning), 1);
        assert_eq!(out.count(Severity::Error), 0);
    }
}
