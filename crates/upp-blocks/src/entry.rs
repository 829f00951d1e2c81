//! Launch entries and normalization of parsed block values.
//!
//! Entries are schemaless: whatever a block declares is kept, with the
//! defaults filling in absent keys. Only `pathName` is owned by the build.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the logical path of the declaring component.
pub const PATH_NAME_KEY: &str = "pathName";

/// One launch configuration in `condition.miniprogram.list`.
///
/// Keys keep their insertion order, so a written entry lists the defaults
/// first, then any keys the block added, then `pathName`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    /// Name derived from a logical path: `pages/home/index` -> `pages_home_index`.
    pub fn default_name(path_name: &str) -> String {
        path_name.replace('/', "_")
    }

    /// Build an entry from one parsed candidate.
    ///
    /// Defaults are applied first, then every field of the candidate, then
    /// `pathName` is forced to `path_name`. Field values are not checked.
    /// A candidate that is not an object contributes no fields.
    pub fn from_candidate(candidate: Value, path_name: &str) -> Self {
        let mut record = Map::new();
        record.insert("query".into(), Value::String(String::new()));
        record.insert("launchMode".into(), Value::String("default".into()));
        record.insert("scene".into(), Value::Null);
        record.insert("name".into(), Value::String(Self::default_name(path_name)));

        if let Value::Object(fields) = candidate {
            record.extend(fields);
        }
        record.insert(PATH_NAME_KEY.into(), Value::String(path_name.to_string()));

        Self(record)
    }

    /// Wrap an existing record as is, e.g. one read back from disk.
    pub fn from_map(record: Map<String, Value>) -> Self {
        Self(record)
    }

    /// The `pathName` value, or `""` when absent or not a string.
    pub fn path_name(&self) -> &str {
        self.0
            .get(PATH_NAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The `name` value, whatever its type.
    pub fn name(&self) -> Option<&Value> {
        self.get("name")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Whether a parsed block value counts as "no value".
///
/// `null`, `false`, `0` and `""` declare nothing; the block is still
/// stripped.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Normalize a parsed block value into the ordered list of candidates.
///
/// A sequence is used as-is, an empty value yields nothing, and anything
/// else is a single candidate.
pub fn candidates(value: Value) -> Vec<Value> {
    if is_empty_value(&value) {
        return Vec::new();
    }
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}
