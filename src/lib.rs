pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{run, RunOptions, RunReport};
pub use crypto::hashing::{document_digest, page_digest};
pub use domain::content::store::ContentStore;
pub use domain::content::{BrandData, EnginePageData};
pub use domain::jsonld::{derive_faq_page, sync_faq_schema};
pub use domain::validate::{
    cross_check_faq_parity, cross_check_identifier_consistency, cross_check_url_canonical_agreement,
    validate_brand_file, Category, Finding, IdentifierNormalizer, JsonPath, Severity, SuffixNormalizer,
    ValidationResult, Validator,
};
pub use storage::InputError;
