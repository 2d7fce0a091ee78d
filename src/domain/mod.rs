pub mod content;
pub mod jsonld;
pub mod validate;
