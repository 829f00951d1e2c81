//! Custom block extraction for uni-project-private.
//!
//! Component files may carry a `<project-private>` block describing one or
//! more launch configurations:
//!
//! ```text
//! <project-private lang="yaml">
//! - name: Home
//!   query: id=1
//! </project-private>
//! ```
//!
//! This crate is the pure core of the build step:
//!
//! - [`formats`] maps a [`BlockLang`] tag to its parser and produces a
//!   `serde_json::Value`.
//! - [`parser`] locates block occurrences in raw source text.
//! - [`entry`] normalizes parsed values into [`Entry`] records.
//! - [`transform`] strips every block from the source and returns the
//!   collected entries.
//!
//! Nothing here holds state across calls; the build driver in `upp-core`
//! owns the persistent document.

pub mod entry;
pub mod error;
pub mod formats;
pub mod parser;
pub mod transform;

pub use entry::{Entry, PATH_NAME_KEY, candidates, is_empty_value};
pub use error::{Error, Result};
pub use formats::{BlockLang, BlockParser, parse_block};
pub use parser::{BLOCK_CLOSE_TAG, BlockOccurrence, find_blocks, has_block_marker};
pub use transform::{TransformOptions, TransformResult, transform_code};
