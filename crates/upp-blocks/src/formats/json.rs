//! JSON block bodies
//!
//! Strict JSON is a subset of JSON5, so the relaxed parser is reused and only
//! the error label differs. Hand-edited blocks with a stray trailing comma
//! still load.

use serde_json::Value;

use super::BlockParser;
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl BlockParser for JsonParser {
    fn label(&self) -> &'static str {
        "JSON"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        ::json5::from_str::<Value>(text).map_err(|e| self.error(e))
    }
}
