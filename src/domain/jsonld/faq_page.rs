//! Builds the `FAQPage` JSON-LD node from `faqs`, making `faqs` the single source of truth.

use super::{Graph, NodeType};
use crate::domain::content::document;
use crate::domain::content::FaqItem;
use crate::domain::validate::urls::strip_fragment;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct AnswerNode<'a> {
    #[serde(rename = "@type")]
    node_type: &'static str,
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionNode<'a> {
    #[serde(rename = "@type")]
    node_type: &'static str,
    name: &'a str,
    accepted_answer: AnswerNode<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FaqPageNode<'a> {
    #[serde(rename = "@type")]
    node_type: &'static str,
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    main_entity: Vec<QuestionNode<'a>>,
}

fn question_nodes(faqs: &[FaqItem]) -> Vec<QuestionNode<'_>> {
    faqs.iter()
        .map(|f| QuestionNode {
            node_type: "Question",
            name: &f.question,
            accepted_answer: AnswerNode {
                node_type: "Answer",
                text: &f.answer,
            },
        })
        .collect()
}

/// The `mainEntity` array for `faqs`.
pub fn derive_main_entity(faqs: &[FaqItem]) -> Value {
    serde_json::to_value(question_nodes(faqs)).unwrap_or_else(|_| Value::Array(Vec::new()))
}

/// A complete `FAQPage` node. `page_url` (fragment ignored) yields `@id = <page>#faq`.
pub fn derive_faq_page(faqs: &[FaqItem], page_url: Option<&str>) -> Value {
    let node = FaqPageNode {
        node_type: NodeType::FaqPage.as_str(),
        id: page_url.map(|u| format!("{}#faq", strip_fragment(u))),
        main_entity: question_nodes(faqs),
    };
    serde_json::to_value(node).unwrap_or(Value::Null)
}

/// Result of rewriting a document's FAQPage nodes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// `brand/code` of pages whose FAQPage node was rewritten or added.
    pub changed: Vec<String>,
    pub unchanged: usize,
    /// `brand/code` and the reason a page was left alone.
    pub skipped: Vec<(String, String)>,
}

impl SyncOutcome {
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Regenerates `FAQPage.mainEntity` of every engine page in `doc` from its `faqs`.
///
/// Existing FAQPage nodes keep their other attributes; pages without one get a new node
/// appended to `@graph`. Pages whose `faqs` or `@graph` cannot be read are skipped.
pub fn sync_faq_schema(doc: &mut Value, file_stem: &str) -> SyncOutcome {
    let mut outcome = SyncOutcome::default();
    for (brand, record) in document::brand_records_mut(doc, file_stem) {
        let Some(engines) = record.get_mut("engines").and_then(Value::as_object_mut) else {
            outcome
                .skipped
                .push((brand.to_string(), "no engines object".to_string()));
            continue;
        };
        for (code, engine) in engines.iter_mut() {
            let label = format!("{}/{}", brand, code);
            match sync_engine(engine) {
                Ok(true) => outcome.changed.push(label),
                Ok(false) => outcome.unchanged += 1,
                Err(reason) => outcome.skipped.push((label, reason)),
            }
        }
    }
    outcome
}

fn sync_engine(engine: &mut Value) -> Result<bool, String> {
    let faqs: Vec<FaqItem> = match engine.get("faqs") {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("unreadable faqs: {}", e))?,
        None => return Err("no faqs".to_string()),
    };
    let main_entity = derive_main_entity(&faqs);

    let (faq_index, page_url) = {
        let graph_items = engine
            .get("schema")
            .and_then(|s| s.get("@graph"))
            .and_then(Value::as_array)
            .ok_or_else(|| "no schema.@graph array".to_string())?;
        let graph = Graph::from_nodes(graph_items);
        let page_url = graph
            .first(NodeType::WebPage)
            .and_then(|p| p.str_field("url").or_else(|| p.id()))
            .map(str::to_string);
        (graph.first(NodeType::FaqPage).map(|n| n.index), page_url)
    };

    let items = engine
        .get_mut("schema")
        .and_then(|s| s.get_mut("@graph"))
        .and_then(Value::as_array_mut)
        .ok_or_else(|| "no schema.@graph array".to_string())?;

    match faq_index {
        Some(i) => {
            let node = &mut items[i];
            if node.get("mainEntity") == Some(&main_entity) {
                return Ok(false);
            }
            node["mainEntity"] = main_entity;
            Ok(true)
        }
        None => {
            if faqs.is_empty() {
                return Ok(false);
            }
            items.push(derive_faq_page(&faqs, page_url.as_deref()));
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::{cross_check_faq_parity, JsonPath};
    use serde_json::json;

    fn faqs() -> Vec<FaqItem> {
        vec![
            FaqItem {
                question: "Is the 4EE1 interference?".into(),
                answer: "Yes.".into(),
            },
            FaqItem {
                question: "Timing belt interval?".into(),
                answer: "100,000 km.".into(),
            },
        ]
    }

    #[test]
    fn derived_page_has_schema_org_shape() {
        let node = derive_faq_page(&faqs(), Some("https://a.com/isuzu/4ee1#webpage"));
        assert_eq!(node["@type"], "FAQPage");
        assert_eq!(node["@id"], "https://a.com/isuzu/4ee1#faq");
        assert_eq!(node["mainEntity"][1]["@type"], "Question");
        assert_eq!(node["mainEntity"][1]["name"], "Timing belt interval?");
        assert_eq!(node["mainEntity"][1]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(node["mainEntity"][1]["acceptedAnswer"]["text"], "100,000 km.");
    }

    #[test]
    fn sync_repairs_drift_and_is_idempotent() {
        let mut doc = json!({
            "engines": {
                "4ee1": {
                    "faqs": serde_json::to_value(faqs()).unwrap(),
                    "schema": { "@context": "https://schema.org", "@graph": [
                        { "@type": "WebPage", "url": "https://a.com/isuzu/4ee1" },
                        { "@type": "FAQPage", "@id": "https://a.com/isuzu/4ee1#faq", "mainEntity": [] }
                    ] }
                },
                "4ee2": {
                    "faqs": serde_json::to_value(faqs()).unwrap(),
                    "schema": { "@context": "https://schema.org", "@graph": [
                        { "@type": "WebPage", "url": "https://a.com/isuzu/4ee2" }
                    ] }
                }
            }
        });

        let outcome = sync_faq_schema(&mut doc, "isuzu");
        assert_eq!(outcome.changed, vec!["isuzu/4ee1", "isuzu/4ee2"]);
        assert_eq!(doc["engines"]["4ee1"]["schema"]["@graph"][1]["@id"], "https://a.com/isuzu/4ee1#faq");
        assert_eq!(doc["engines"]["4ee2"]["schema"]["@graph"][1]["@id"], "https://a.com/isuzu/4ee2#faq");

        for code in ["4ee1", "4ee2"] {
            let path = JsonPath::root().key("engines").entry(code);
            assert!(cross_check_faq_parity(&doc["engines"][code], &path).is_empty());
        }

        let again = sync_faq_schema(&mut doc, "isuzu");
        assert!(again.is_clean());
        assert_eq!(again.unchanged, 2);
    }

    #[test]
    fn unreadable_pages_are_skipped() {
        let mut doc = json!({ "engines": { "x": { "faqs": "nope", "schema": { "@graph": [] } } } });
        let outcome = sync_faq_schema(&mut doc, "isuzu");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].0, "isuzu/x");
    }
}
