//! The `project.private.config.json` document
//!
//! Only `condition.miniprogram.list` is owned by this crate. Every other key
//! is kept verbatim and in its original order, so a rewrite never reshuffles
//! settings edited by the devtools.
//!
//! ```json
//! {
//!   "projectname": "demo",
//!   "description": "",
//!   "setting": { "compileHotReLoad": true },
//!   "condition": { "miniprogram": { "list": [] } }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use upp_blocks::{BlockLang, Entry, parse_block};

use crate::collate::locale_compare;
use crate::error::{Error, Result};

const CONDITION_KEY: &str = "condition";
const MINIPROGRAM_KEY: &str = "miniprogram";
const LIST_KEY: &str = "list";

/// Typed view of the `setting` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "compileHotReLoad", default)]
    pub compile_hot_reload: bool,
}

/// The persistent configuration document with its entry list split out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPrivateConfig {
    document: Map<String, Value>,
    entries: Vec<Entry>,
}

impl ProjectPrivateConfig {
    /// Parse the document leniently (comments and trailing commas allowed).
    ///
    /// `condition` and `condition.miniprogram` are created on write when
    /// absent, but must be objects when present; `list` must be an array.
    /// List items are not validated: object items are kept as entries
    /// whatever their fields hold, anything else is dropped.
    pub fn parse(text: &str) -> Result<Self> {
        let Value::Object(document) = parse_block(BlockLang::Json, text)? else {
            return Err(Error::InvalidDocument {
                message: "top level must be an object".into(),
            });
        };

        let list = match document.get(CONDITION_KEY) {
            None => None,
            Some(Value::Object(condition)) => match condition.get(MINIPROGRAM_KEY) {
                None => None,
                Some(Value::Object(miniprogram)) => miniprogram.get(LIST_KEY).cloned(),
                Some(_) => {
                    return Err(Error::InvalidDocument {
                        message: "condition.miniprogram must be an object".into(),
                    });
                }
            },
            Some(_) => {
                return Err(Error::InvalidDocument {
                    message: "condition must be an object".into(),
                });
            }
        };

        let entries: Vec<Entry> = match list {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(record) => Some(Entry::from_map(record)),
                    other => {
                        tracing::debug!(item = %other, "Dropping non-object list item");
                        None
                    }
                })
                .collect(),
            Some(_) => {
                return Err(Error::InvalidDocument {
                    message: "condition.miniprogram.list must be an array".into(),
                });
            }
        };

        Ok(Self { document, entries })
    }

    pub fn projectname(&self) -> Option<&str> {
        self.document.get("projectname").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.document.get("description").and_then(Value::as_str)
    }

    /// The `setting` section, if present and well-formed.
    pub fn setting(&self) -> Option<Setting> {
        let setting = self.document.get("setting")?;
        serde_json::from_value(setting.clone()).ok()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Drop every entry, so a build only reflects blocks that still exist.
    pub fn reset_entries(&mut self) {
        self.entries.clear();
    }

    /// Replace all entries declared by `path_name` with `entries`.
    ///
    /// Old entries for the path are removed and the new ones appended at the
    /// end, rather than patched in place.
    pub fn replace_entries(&mut self, path_name: &str, entries: Vec<Entry>) {
        self.entries.retain(|entry| entry.path_name() != path_name);
        self.entries.extend(entries);
    }

    /// Stable sort by `pathName`, locale-aware.
    pub fn sort_entries(&mut self) {
        self.entries
            .sort_by(|a, b| locale_compare(a.path_name(), b.path_name()));
    }

    /// The full document with the current entries written back in place.
    pub fn to_value(&self) -> Result<Value> {
        let mut document = self.document.clone();
        let list = serde_json::to_value(&self.entries)?;

        let condition = object_slot(&mut document, CONDITION_KEY);
        let miniprogram = object_slot(condition, MINIPROGRAM_KEY);
        miniprogram.insert(LIST_KEY.into(), list);

        Ok(Value::Object(document))
    }

    /// Serialize as two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}

/// Get the object stored under `key`, inserting an empty one if needed.
fn object_slot<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    let Value::Object(object) = slot else {
        unreachable!("slot was just made an object")
    };
    object
}
