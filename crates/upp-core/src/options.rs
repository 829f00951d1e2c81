//! User options for the build step

use serde::{Deserialize, Serialize};
use upp_blocks::{BlockLang, TransformOptions};
use upp_fs::DEFAULT_CONFIG_DIR;

fn default_dir() -> String {
    DEFAULT_CONFIG_DIR.to_string()
}

/// Options accepted when the plugin is constructed.
///
/// Deserializes from `upp.toml` and friends:
///
/// ```toml
/// dir = "src"
/// lang = "yaml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    /// Directory under the project root holding `project.private.config.json`
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Format for blocks that carry no `lang` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<BlockLang>,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            lang: None,
        }
    }
}

impl ProjectOptions {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions { lang: self.lang }
    }
}
