//! JSON5 block bodies
//!
//! The default format: comments, trailing commas, unquoted keys and
//! single-quoted strings are all accepted.
//!
//! ```text
//! <project-private>
//! {
//!   name: 'Home', // shown in the devtools launch menu
//!   query: 'id=1',
//! }
//! </project-private>
//! ```

use serde_json::Value;

use super::BlockParser;
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct Json5Parser;

impl BlockParser for Json5Parser {
    fn label(&self) -> &'static str {
        "JSON5"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        ::json5::from_str::<Value>(text).map_err(|e| self.error(e))
    }
}
