//! Shape tables for brand records, engine pages and the schema.org node types.

use super::shape::{Field, Shape};

pub const IMAGE: &[Field] = &[
    Field::required("src", Shape::ImageSrc),
    Field::required("alt", Shape::Text),
];

/// Brand-level fields other than `engines`, which is checked entry by entry.
pub const BRAND: &[Field] = &[
    Field::required("researchResources", Shape::Map(&Shape::Url)),
    Field::required("heroImage", Shape::Record(IMAGE)),
];

/// Sub-objects every engine page must supply.
pub const ENGINE_REQUIRED: [&str; 7] = [
    "hero",
    "technicalSpecifications",
    "compatibleModels",
    "commonReliabilityIssues",
    "faqs",
    "schema",
    "bannerImage",
];

const DISCLAIMER: &[Field] = &[
    Field::required("title", Shape::Text),
    Field::required("text", Shape::Text),
];

const HERO: &[Field] = &[
    Field::required("years", Shape::Text),
    Field::required(
        "description",
        Shape::List {
            item: &Shape::Text,
            expect_entries: true,
        },
    ),
    Field::required("disclaimer", Shape::Record(DISCLAIMER)),
];

const SPEC_ROW: &[Field] = &[
    Field::required("parameter", Shape::Text),
    Field::required("value", Shape::Text),
    Field::required("source", Shape::Citation),
];

const PRACTICAL_IMPLICATIONS: &[Field] = &[
    Field::required("heading", Shape::Text),
    Field::required("content", Shape::Text),
    Field::required("verificationNotes", Shape::Map(&Shape::Text)),
    Field::required(
        "primarySources",
        Shape::List {
            item: &Shape::Citation,
            expect_entries: true,
        },
    ),
];

const TECHNICAL_SPECIFICATIONS: &[Field] = &[
    Field::required("description", Shape::Text),
    Field::required(
        "engineSpecs",
        Shape::List {
            item: &Shape::Record(SPEC_ROW),
            expect_entries: true,
        },
    ),
    Field::required("practicalImplications", Shape::Record(PRACTICAL_IMPLICATIONS)),
];

const MODEL_ROW: &[Field] = &[
    Field::required("Make", Shape::Text),
    Field::required("Models", Shape::Text),
    Field::required("Years", Shape::Text),
    Field::required("Variants", Shape::Text),
    Field::required("OEM Source", Shape::Citation),
];

const COMPATIBLE_MODELS: &[Field] = &[
    Field::required("description", Shape::Text),
    Field::required(
        "models",
        Shape::List {
            item: &Shape::Record(MODEL_ROW),
            expect_entries: true,
        },
    ),
    Field::required("guidance", Shape::Text),
    // Entries are checked by the extra-notes pass.
    Field::optional("extraNotes", Shape::Array),
];

const ISSUE: &[Field] = &[
    Field::required("title", Shape::Text),
    Field::required("symptoms", Shape::Text),
    Field::required("cause", Shape::Text),
    Field::required("fix", Shape::Text),
];

const INFO_BLOCK: &[Field] = &[
    Field::required("title", Shape::Text),
    Field::required("description", Shape::Text),
    Field::required("gradient", Shape::Text),
];

const COMMON_RELIABILITY_ISSUES: &[Field] = &[
    Field::required("subheading", Shape::Text),
    Field::required(
        "issues",
        Shape::List {
            item: &Shape::Record(ISSUE),
            expect_entries: true,
        },
    ),
    Field::required("infoBlock", Shape::Record(INFO_BLOCK)),
];

const FAQ_ITEM: &[Field] = &[
    Field::required("question", Shape::Text),
    Field::required("answer", Shape::Text),
];

pub const ENGINE: &[Field] = &[
    Field::required("hero", Shape::Record(HERO)),
    Field::required("technicalSpecifications", Shape::Record(TECHNICAL_SPECIFICATIONS)),
    Field::required("compatibleModels", Shape::Record(COMPATIBLE_MODELS)),
    Field::required("commonReliabilityIssues", Shape::Record(COMMON_RELIABILITY_ISSUES)),
    Field::required(
        "faqs",
        Shape::List {
            item: &Shape::Record(FAQ_ITEM),
            expect_entries: true,
        },
    ),
    // `@context` / `@graph` are checked by the JSON-LD pass.
    Field::required("schema", Shape::Object),
    Field::required("bannerImage", Shape::Record(IMAGE)),
];

// ---- schema.org node types ----

pub const SCHEMA_ROOT: &[Field] = &[
    Field::required("@context", Shape::Text),
    Field::required(
        "@graph",
        Shape::List {
            item: &Shape::Object,
            expect_entries: true,
        },
    ),
];

pub const WEB_PAGE: &[Field] = &[
    Field::required("@id", Shape::Url),
    Field::required("url", Shape::Url),
    Field::required("name", Shape::Text),
    Field::optional("description", Shape::Text),
    Field::optional("isPartOf", Shape::Reference),
    Field::optional("breadcrumb", Shape::Object),
    Field::optional("inLanguage", Shape::Text),
];

pub const WEB_SITE: &[Field] = &[
    Field::required("url", Shape::Url),
    Field::required("name", Shape::Text),
    Field::optional("@id", Shape::Url),
    Field::optional("publisher", Shape::Entity),
];

const IMAGE_OBJECT: &[Field] = &[
    Field::optional("@type", Shape::Literal("ImageObject")),
    Field::required("url", Shape::Url),
];

const ORGANIZATION: &[Field] = &[
    Field::optional("@type", Shape::Text),
    Field::required("name", Shape::Text),
    Field::optional("url", Shape::Url),
    Field::optional("logo", Shape::Record(IMAGE_OBJECT)),
];

pub const ARTICLE: &[Field] = &[
    Field::required("headline", Shape::Text),
    Field::required("mainEntityOfPage", Shape::Reference),
    Field::required("author", Shape::Entity),
    Field::required("publisher", Shape::Record(ORGANIZATION)),
    Field::required("datePublished", Shape::Date),
    Field::optional("dateModified", Shape::Date),
    Field::optional("image", Shape::Entity),
    Field::optional("description", Shape::Text),
];

const QUANTITATIVE_VALUE: &[Field] = &[
    Field::optional("@type", Shape::Literal("QuantitativeValue")),
    Field::required("value", Shape::Number),
    Field::optional("unitCode", Shape::Text),
    Field::optional("unitText", Shape::Text),
];

pub const VEHICLE_ENGINE: &[Field] = &[
    Field::required("identifier", Shape::Identifier),
    Field::required("name", Shape::Text),
    Field::optional("manufacturer", Shape::Entity),
    Field::optional("engineDisplacement", Shape::Record(QUANTITATIVE_VALUE)),
    Field::optional("enginePower", Shape::Record(QUANTITATIVE_VALUE)),
    Field::optional("torque", Shape::Record(QUANTITATIVE_VALUE)),
    Field::optional("fuelType", Shape::Text),
    Field::optional("engineType", Shape::Text),
];

pub const DATASET: &[Field] = &[
    Field::required("name", Shape::Text),
    Field::required("description", Shape::Text),
    Field::required("url", Shape::Url),
    Field::optional("creator", Shape::Entity),
    Field::optional("license", Shape::Url),
];

const ANSWER: &[Field] = &[
    Field::required("@type", Shape::Literal("Answer")),
    Field::required("text", Shape::Text),
];

const QUESTION: &[Field] = &[
    Field::required("@type", Shape::Literal("Question")),
    Field::required("name", Shape::Text),
    Field::required("acceptedAnswer", Shape::Record(ANSWER)),
];

pub const FAQ_PAGE: &[Field] = &[Field::required(
    "mainEntity",
    Shape::List {
        item: &Shape::Record(QUESTION),
        expect_entries: false,
    },
)];
