//! Filesystem layer for uni-project-private
//!
//! Provides normalized path handling, logical-path derivation for component
//! files, lenient reads and atomic writes.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::{DEFAULT_CONFIG_DIR, ELIGIBLE_EXTENSIONS, PROJECT_CONFIG_FILE, SOURCE_DIR};
pub use error::{Error, Result};
pub use path::{NormalizedPath, is_eligible, logical_path};
