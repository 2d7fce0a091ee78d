//! ContentStore: the loaded dataset, keyed by `(brand, engine code)`.

use super::document;
use super::{BrandData, EnginePageData};
use crate::storage::{self, BrandFile, InputError};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable set of brand records. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    brands: BTreeMap<String, BrandData>,
}

impl ContentStore {
    /// Creates a new empty ContentStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every content file under `root` into typed records.
    ///
    /// Unlike validation this is strict: the first file that does not deserialize into
    /// `BrandData` aborts the load.
    pub fn load_dir(root: &Path) -> Result<Self, InputError> {
        let mut store = ContentStore::new();
        for path in storage::discover(root, false)? {
            let file = storage::read_brand_file(&path)?;
            store.insert_file(&file)?;
        }
        Ok(store)
    }

    /// Adds the brands of an already-parsed file. A later file wins on duplicate brand slugs.
    pub fn insert_file(&mut self, file: &BrandFile) -> Result<(), InputError> {
        for (slug, record) in document::brand_records(&file.document, &file.stem) {
            let brand: BrandData =
                serde_json::from_value(record.clone()).map_err(|source| InputError::Layout {
                    path: file.path.clone(),
                    source,
                })?;
            self.brands.insert(slug.to_string(), brand);
        }
        Ok(())
    }

    pub fn brand(&self, slug: &str) -> Option<&BrandData> {
        self.brands.get(slug)
    }

    /// Retrieves one engine page. Returns None if either key is unknown.
    pub fn get(&self, brand: &str, engine_code: &str) -> Option<&EnginePageData> {
        self.brands.get(brand)?.engines.get(engine_code)
    }

    /// Returns all brand slugs, sorted.
    pub fn brands(&self) -> Vec<&str> {
        self.brands.keys().map(String::as_str).collect()
    }

    pub fn engine_codes(&self, brand: &str) -> Vec<&str> {
        self.brands
            .get(brand)
            .map(|b| b.engines.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.brands.values().map(|b| b.engines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
