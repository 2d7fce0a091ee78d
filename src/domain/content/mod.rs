//! Typed brand and engine page records.
//!
//! These types describe valid content. Loading through them is strict (serde errors on
//! missing fields); use the validator for diagnostics on content that may be broken.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod document;
pub mod extra_notes;
pub mod store;

pub use extra_notes::ExtraNote;
pub use store::ContentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandData {
    /// Labelled research links (manufacturer portal, parts catalogue, ...).
    pub research_resources: BTreeMap<String, String>,
    pub hero_image: Image,
    /// Engine code slug → page.
    pub engines: BTreeMap<String, EnginePageData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnginePageData {
    pub hero: Hero,
    pub technical_specifications: TechnicalSpecifications,
    pub compatible_models: CompatibleModels,
    pub common_reliability_issues: CommonReliabilityIssues,
    pub faqs: Vec<FaqItem>,
    pub schema: SchemaData,
    pub banner_image: Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Production years, free text ("2004–2012").
    pub years: String,
    pub description: Vec<String>,
    pub disclaimer: Disclaimer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecifications {
    pub description: String,
    pub engine_specs: Vec<SpecRow>,
    pub practical_implications: PracticalImplications,
}

/// A specification value attributed to a citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub parameter: String,
    pub value: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticalImplications {
    pub heading: String,
    pub content: String,
    pub verification_notes: BTreeMap<String, String>,
    pub primary_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibleModels {
    pub description: String,
    pub models: Vec<CompatibleModel>,
    pub guidance: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_notes: Vec<ExtraNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibleModel {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Models")]
    pub models: String,
    #[serde(rename = "Years")]
    pub years: String,
    #[serde(rename = "Variants")]
    pub variants: String,
    #[serde(rename = "OEM Source")]
    pub oem_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonReliabilityIssues {
    pub subheading: String,
    pub issues: Vec<Issue>,
    pub info_block: InfoBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub symptoms: String,
    pub cause: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBlock {
    pub title: String,
    pub description: String,
    /// CSS gradient used for theming; carries no content meaning.
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The page's JSON-LD object. Graph nodes are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<Value>,
}

impl SchemaData {
    pub fn graph(&self) -> crate::domain::jsonld::Graph<'_> {
        crate::domain::jsonld::Graph::from_nodes(&self.graph)
    }
}
