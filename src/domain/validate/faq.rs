//! `faqs` versus `FAQPage.mainEntity` parity.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use crate::domain::jsonld::{Graph, NodeType};
use serde_json::Value;

struct QaPair<'a> {
    question: Option<&'a str>,
    answer: Option<&'a str>,
}

fn faq_pairs(faqs: &[Value]) -> Vec<QaPair<'_>> {
    faqs.iter()
        .map(|f| QaPair {
            question: f.get("question").and_then(Value::as_str),
            answer: f.get("answer").and_then(Value::as_str),
        })
        .collect()
}

fn main_entity_pairs(entries: &[Value]) -> Vec<QaPair<'_>> {
    entries
        .iter()
        .map(|q| QaPair {
            question: q.get("name").and_then(Value::as_str),
            answer: q
                .get("acceptedAnswer")
                .and_then(|a| a.get("text"))
                .and_then(Value::as_str),
        })
        .collect()
}

/// Compares the human-readable FAQ list with the JSON-LD `FAQPage` node of one engine
/// page located at `path`. Text comparison is exact and case-sensitive.
pub fn cross_check_faq_parity(engine: &Value, path: &JsonPath) -> ValidationResult {
    let mut out = ValidationResult::new();

    let Some(faqs) = engine.get("faqs").and_then(Value::as_array) else {
        return out;
    };
    let graph_path = path.key("schema").key("@graph");
    let graph = Graph::of_engine(engine);
    let faq_nodes = graph.of_type(NodeType::FaqPage);

    let Some(node) = faq_nodes.first() else {
        if !faqs.is_empty() {
            out.error(
                Category::ContentInconsistency,
                &graph_path,
                format!(
                    "faqs has {} entries but @graph has no FAQPage node",
                    faqs.len()
                ),
            );
        }
        return out;
    };
    for extra in faq_nodes.iter().skip(1) {
        out.warning(
            Category::ContentInconsistency,
            graph_path.index(extra.index),
            format!(
                "duplicate FAQPage node; faqs are compared against @graph[{}]",
                node.index
            ),
        );
    }

    let main_path = graph_path.index(node.index).key("mainEntity");
    let Some(entries) = node.value.get("mainEntity").and_then(Value::as_array) else {
        // Missing or mistyped mainEntity is reported by the JSON-LD pass.
        return out;
    };

    let left = faq_pairs(faqs);
    let right = main_entity_pairs(entries);
    let common = left.len().min(right.len());
    let mut first_divergence = None;

    for (i, (faq, question)) in left.iter().zip(right.iter()).enumerate() {
        let question_differs = faq.question != question.question;
        let answer_differs = faq.answer != question.answer;
        if !question_differs && !answer_differs {
            continue;
        }
        first_divergence.get_or_insert(i);
        let what = match (question_differs, answer_differs) {
            (true, true) => "question and answer differ",
            (true, false) => "question differs",
            _ => "answer differs",
        };
        out.error(
            Category::ContentInconsistency,
            main_path.index(i),
            format!("{} from faqs[{}]", what, i),
        );
    }

    if left.len() != right.len() {
        out.error(
            Category::ContentInconsistency,
            &main_path,
            format!(
                "faqs has {} entries but FAQPage.mainEntity has {} (first divergence at index {})",
                left.len(),
                right.len(),
                first_divergence.unwrap_or(common)
            ),
        );
    }

    out
}
