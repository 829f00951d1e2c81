//! Format dispatch for block bodies
//!
//! Each supported `lang` tag maps to a parser implementing [`BlockParser`].
//! Parsers produce an untyped `serde_json::Value`; no schema is applied.

pub mod json;
pub mod json5;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Parser for one serialization format.
pub trait BlockParser: Send + Sync {
    /// Label used in error messages, e.g. `JSON5`.
    fn label(&self) -> &'static str;

    /// Parse raw text into a structured value.
    ///
    /// Failures carry the underlying parser's message, prefixed by the
    /// format label.
    fn parse(&self, text: &str) -> Result<Value>;

    /// Wrap an underlying parser error with this format's label.
    fn error(&self, detail: impl fmt::Display) -> Error
    where
        Self: Sized,
    {
        Error::Parse {
            format: self.label(),
            message: detail.to_string(),
        }
    }
}

/// Format tag accepted in a block's `lang` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockLang {
    #[default]
    Json5,
    Json,
    Yaml,
    Yml,
}

impl BlockLang {
    pub const ALL: [BlockLang; 4] = [Self::Json5, Self::Json, Self::Yaml, Self::Yml];

    /// The tag as written in source, e.g. `json5`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json5 => "json5",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Yml => "yml",
        }
    }

    /// The parser handling this tag. `yaml` and `yml` share one parser.
    pub fn parser(&self) -> &'static dyn BlockParser {
        match self {
            Self::Json5 => &crate::formats::json5::Json5Parser,
            Self::Json => &json::JsonParser,
            Self::Yaml | Self::Yml => &yaml::YamlParser,
        }
    }
}

impl fmt::Display for BlockLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockLang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == tag)
            .ok_or_else(|| Error::UnknownLang {
                lang: tag.to_string(),
            })
    }
}

/// Parse a block body with the parser registered for `lang`.
pub fn parse_block(lang: BlockLang, text: &str) -> Result<Value> {
    lang.parser().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_trims() {
        assert_eq!(" yml ".parse::<BlockLang>().unwrap(), BlockLang::Yml);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "toml".parse::<BlockLang>().unwrap_err();
        assert!(matches!(err, Error::UnknownLang { lang } if lang == "toml"));
    }

    #[test]
    fn test_yaml_spellings_share_parser() {
        assert_eq!(BlockLang::Yaml.parser().label(), "YAML");
        assert_eq!(BlockLang::Yml.parser().label(), "YAML");
    }

    #[test]
    fn test_default_is_json5() {
        assert_eq!(BlockLang::default(), BlockLang::Json5);
    }
}
