//! Fixed names shared by the transformer and the build driver.

/// File name of the persistent configuration document.
pub const PROJECT_CONFIG_FILE: &str = "project.private.config.json";

/// Default subdirectory (under the project root) holding the document.
pub const DEFAULT_CONFIG_DIR: &str = "src";

/// Source root that logical paths are computed against.
pub const SOURCE_DIR: &str = "src";

/// Component file extensions eligible for transformation.
pub const ELIGIBLE_EXTENSIONS: &[&str] = &["vue", "nvue"];
