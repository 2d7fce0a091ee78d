// Content digests for validated files.

use serde_json::Value;
use sha2::{Digest, Sha256};

// Domain separation between whole documents and single engine pages.
const DOCUMENT_DOMAIN: &[u8] = b"CONTENTDOC";
const PAGE_DOMAIN: &[u8] = b"CONTENTPAGE";

/// Streams `value` into `hasher` as compact JSON with object keys in byte order, so editorial
/// key order never changes a digest. Array order is content and is kept.
fn feed_canonical(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            hasher.update(b"{");
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    hasher.update(b",");
                }
                feed_string(hasher, key);
                hasher.update(b":");
                feed_canonical(hasher, item);
            }
            hasher.update(b"}");
        }
        Value::Array(items) => {
            hasher.update(b"[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    hasher.update(b",");
                }
                feed_canonical(hasher, item);
            }
            hasher.update(b"]");
        }
        Value::String(s) => feed_string(hasher, s),
        // null, booleans and numbers have a single compact rendering.
        scalar => hasher.update(scalar.to_string().as_bytes()),
    }
}

/// Quoted and escaped, as in the JSON text.
fn feed_string(hasher: &mut Sha256, s: &str) {
    hasher.update(Value::from(s).to_string().as_bytes());
}

/// Hex SHA-256 of a document's canonical serialization.
pub fn document_digest(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOCUMENT_DOMAIN);
    feed_canonical(&mut hasher, value);
    hex::encode(hasher.finalize())
}

/// Digest of one engine page, bound to its `(brand, engine code)` key.
pub fn page_digest(brand: &str, engine_code: &str, page: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(PAGE_DOMAIN);
    for part in [brand, engine_code] {
        hasher.update(part.as_bytes());
        hasher.update(b"\0");
    }
    feed_canonical(&mut hasher, page);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_change_the_digest() {
        let a = json!({ "b": 1, "a": { "y": [1, 2], "x": "s" } });
        let b = json!({ "a": { "x": "s", "y": [1, 2] }, "b": 1 });
        assert_eq!(document_digest(&a), document_digest(&b));
        assert_eq!(document_digest(&a).len(), 64);
    }

    #[test]
    fn array_order_and_keys_matter() {
        assert_ne!(document_digest(&json!([1, 2])), document_digest(&json!([2, 1])));
        let page = json!({ "faqs": [] });
        assert_ne!(page_digest("isuzu", "4ee1", &page), page_digest("isuzu", "4ee2", &page));
        assert_ne!(page_digest("isuzu", "4ee1", &page), document_digest(&page));
    }

    #[test]
    fn separators_inside_strings_are_escaped() {
        let joined = json!({ "k": "a\",\"b\":\"c" });
        let split = json!({ "k": "a", "b": "c" });
        assert_ne!(document_digest(&joined), document_digest(&split));
    }
}
