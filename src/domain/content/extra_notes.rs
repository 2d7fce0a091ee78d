//! `extraNotes` entries: an open attribute set normalized to ordered string lists.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const KEY_FIELD: &str = "key";
pub const EVIDENCE_FIELD: &str = "Evidence";

/// One extra note. Scalar attribute values are stored as single-element lists, so callers
/// never branch on "string or array".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraNote {
    pub key: String,
    /// Attributes other than `key`, in source order.
    pub attributes: Vec<(String, Vec<String>)>,
}

impl ExtraNote {
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn evidence(&self) -> Option<&[String]> {
        self.get(EVIDENCE_FIELD)
    }

    /// Builds a note from a JSON object, normalizing scalar values.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, String> {
        let key = match map.get(KEY_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(format!("`{}` must be a string", KEY_FIELD)),
            None => return Err(format!("missing `{}`", KEY_FIELD)),
        };

        let mut attributes = Vec::with_capacity(map.len().saturating_sub(1));
        for (name, value) in map.iter().filter(|(n, _)| n.as_str() != KEY_FIELD) {
            let values = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|v| {
                        v.as_str()
                            .map(str::to_string)
                            .ok_or_else(|| format!("`{}` must contain only strings", name))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                _ => return Err(format!("`{}` must be a string or array of strings", name)),
            };
            attributes.push((name.clone(), values));
        }
        Ok(Self { key, attributes })
    }
}

impl<'de> Deserialize<'de> for ExtraNote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        ExtraNote::from_map(&map).map_err(de::Error::custom)
    }
}

impl Serialize for ExtraNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 1))?;
        map.serialize_entry(KEY_FIELD, &self.key)?;
        for (name, values) in &self.attributes {
            match values.as_slice() {
                [single] => map.serialize_entry(name, single)?,
                many => map.serialize_entry(name, many)?,
            }
        }
        map.end()
    }
}
