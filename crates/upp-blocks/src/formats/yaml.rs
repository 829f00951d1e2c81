//! YAML block bodies, selected by `lang="yaml"` or `lang="yml"`.

use serde_json::Value;

use super::BlockParser;
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl BlockParser for YamlParser {
    fn label(&self) -> &'static str {
        "YAML"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        serde_yaml::from_str::<Value>(text).map_err(|e| self.error(e))
    }
}
