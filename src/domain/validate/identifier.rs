//! `VehicleEngine.identifier` versus the engine code map key.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use crate::domain::jsonld::{Graph, NodeType};
use serde_json::Value;

/// Normalizes engine identifiers before comparison.
///
/// Content owners sometimes qualify the JSON-LD identifier (`4EE2-PETROL` under key `4ee2`);
/// the normalizer decides which of those qualifications are accepted.
pub trait IdentifierNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

/// Case-folds and strips configured suffix tokens (`-PETROL`, `_DIESEL`, ` TURBO`).
///
/// With no tokens configured this is plain case-insensitive equality.
#[derive(Debug, Clone, Default)]
pub struct SuffixNormalizer {
    suffixes: Vec<String>,
}

const SEPARATORS: [char; 3] = ['-', '_', ' '];

impl SuffixNormalizer {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| {
                s.as_ref()
                    .trim()
                    .trim_start_matches(SEPARATORS)
                    .to_lowercase()
            })
            .filter(|s| !s.is_empty())
            .collect();
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl IdentifierNormalizer for SuffixNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let mut current = raw.trim().to_lowercase();
        // Tokens may stack (`4JJ1-TC-DIESEL`), so strip until nothing matches.
        loop {
            let stripped = self.suffixes.iter().find_map(|suffix| {
                let head = current.strip_suffix(suffix.as_str())?;
                let head = head.strip_suffix(SEPARATORS)?;
                (!head.is_empty()).then(|| head.to_string())
            });
            match stripped {
                Some(next) => current = next,
                None => return current,
            }
        }
    }
}

/// Text of a schema.org `identifier`, which is either a string or a `PropertyValue`.
/// Returns the text and its path relative to the `identifier` field.
fn identifier_text(raw: &Value, path: JsonPath) -> Option<(String, JsonPath)> {
    match raw {
        Value::String(s) => Some((s.clone(), path)),
        Value::Object(map) => match map.get("value")? {
            Value::String(s) => Some((s.clone(), path.key("value"))),
            Value::Number(n) => Some((n.to_string(), path.key("value"))),
            _ => None,
        },
        _ => None,
    }
}

/// Warns when a `VehicleEngine.identifier` does not match `engine_code` after normalization.
pub fn cross_check_identifier_consistency(
    engine_code: &str,
    engine: &Value,
    normalizer: &dyn IdentifierNormalizer,
    path: &JsonPath,
) -> ValidationResult {
    let mut out = ValidationResult::new();
    let graph_path = path.key("schema").key("@graph");
    let graph = Graph::of_engine(engine);
    let nodes = graph.of_type(NodeType::VehicleEngine);

    if nodes.is_empty() {
        if engine.get("schema").is_some() {
            out.warning(
                Category::ContentInconsistency,
                &graph_path,
                "@graph has no VehicleEngine node to carry the engine identifier",
            );
        }
        return out;
    }

    let expected = normalizer.normalize(engine_code);
    for node in nodes {
        let field_path = graph_path.index(node.index).key("identifier");
        let Some((identifier, identifier_path)) = node
            .value
            .get("identifier")
            .and_then(|raw| identifier_text(raw, field_path))
        else {
            // Missing or mistyped identifier is a shape error reported by the JSON-LD pass.
            continue;
        };
        if normalizer.normalize(&identifier) != expected {
            out.warning(
                Category::ContentInconsistency,
                identifier_path,
                format!(
                    "VehicleEngine identifier '{}' does not match engine code '{}'",
                    identifier, engine_code
                ),
            );
        }
    }
    out
}
