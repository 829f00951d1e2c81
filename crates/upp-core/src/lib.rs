//! Build driver for uni-project-private
//!
//! Sits above the Layer 0 crates and owns the state of one build:
//!
//! ```text
//!              upp-cli / host pipeline
//!                        |
//!                    upp-core
//!                        |
//!               +--------+--------+
//!               |                 |
//!            upp-fs          upp-blocks
//! ```
//!
//! - **Options**: [`ProjectOptions`] select the document directory and the
//!   fallback block format.
//! - **Document**: [`ProjectPrivateConfig`] models
//!   `project.private.config.json`, rewriting only
//!   `condition.miniprogram.list`.
//! - **Plugin**: [`ProjectPrivatePlugin`] loads the document once, merges
//!   each file's entries keyed by logical path, and writes the sorted
//!   document exactly once at build end.

pub mod collate;
pub mod document;
pub mod error;
pub mod options;
pub mod plugin;

pub use collate::locale_compare;
pub use document::{ProjectPrivateConfig, Setting};
pub use error::{Error, Result};
pub use options::ProjectOptions;
pub use plugin::ProjectPrivatePlugin;
