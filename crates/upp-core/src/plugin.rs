//! Per-build driver
//!
//! One [`ProjectPrivatePlugin`] lives for exactly one build. The host calls
//! [`ProjectPrivatePlugin::transform`] once per source file, serially, and
//! [`ProjectPrivatePlugin::build_end`] when the build finishes.

use std::path::Path;

use upp_blocks::{has_block_marker, transform_code};
use upp_fs::{NormalizedPath, PROJECT_CONFIG_FILE, SOURCE_DIR, io, is_eligible, logical_path};

use crate::document::ProjectPrivateConfig;
use crate::error::{Error, Result};
use crate::options::ProjectOptions;

/// Build state: the loaded document plus the one-shot finalize flag.
#[derive(Debug)]
pub struct ProjectPrivatePlugin {
    options: ProjectOptions,
    source_root: NormalizedPath,
    config_path: NormalizedPath,
    config: Option<ProjectPrivateConfig>,
    finalized: bool,
}

impl ProjectPrivatePlugin {
    /// Name reported to the host pipeline.
    pub const NAME: &'static str = "WeixinProjectPrivate";

    /// Start a build rooted at `root`.
    ///
    /// Loads `<root>/<dir>/project.private.config.json` and clears its entry
    /// list. A missing or malformed document is logged and the build carries
    /// on: blocks are still stripped, but nothing is merged or written.
    pub fn new(root: impl AsRef<Path>, options: ProjectOptions) -> Self {
        let root = NormalizedPath::new(root);
        let config_path = root.join(&options.dir).join(PROJECT_CONFIG_FILE);
        let source_root = root.join(SOURCE_DIR);

        let config = match Self::load(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("{e}; project-private entries will not be merged");
                None
            }
        };

        Self {
            options,
            source_root,
            config_path,
            config,
            finalized: false,
        }
    }

    /// Read and parse the document, with its entry list reset.
    pub fn load(path: &NormalizedPath) -> Result<ProjectPrivateConfig> {
        if !path.is_file() {
            return Err(Error::ConfigLoad {
                path: path.to_native(),
                message: "file not found".into(),
            });
        }

        let text = io::read_text_or_empty(path);
        let mut config = ProjectPrivateConfig::parse(&text).map_err(|e| Error::ConfigLoad {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        config.reset_entries();

        tracing::debug!(path = %path, "Loaded project config");
        Ok(config)
    }

    /// Transform one source file.
    ///
    /// Returns `Some(content)` with every block stripped when at least one
    /// block produced a value, `None` when the file should be left as is.
    /// The file's previous entries are replaced by the new ones, even when
    /// the new list is empty.
    ///
    /// # Errors
    ///
    /// A malformed block fails the transform. This is meant to fail the
    /// build.
    pub fn transform(&mut self, id: impl AsRef<Path>, code: &str) -> Result<Option<String>> {
        if self.finalized {
            return Ok(None);
        }

        let file = NormalizedPath::new(id);
        if !is_eligible(&file) || !has_block_marker(code) {
            return Ok(None);
        }

        let Some(path_name) = logical_path(&self.source_root, &file) else {
            tracing::debug!(file = %file, "Outside source root, skipping");
            return Ok(None);
        };

        let result = transform_code(code, &path_name, self.options.transform_options())?;

        tracing::debug!(
            path_name = %path_name,
            entries = result.entries.len(),
            changed = result.changed,
            "Transformed"
        );

        if let Some(config) = self.config.as_mut() {
            config.replace_entries(&path_name, result.entries);
        }

        Ok(result.changed.then_some(result.content))
    }

    /// Finish the build: sort entries and write the document once.
    ///
    /// Returns whether the document was written. Later calls, and calls on a
    /// build whose document failed to load, write nothing.
    pub fn build_end(&mut self) -> Result<bool> {
        if self.finalized {
            return Ok(false);
        }
        self.finalized = true;

        let Some(config) = self.config.as_mut() else {
            return Ok(false);
        };

        config.sort_entries();
        let json = config.to_json_pretty()?;
        io::write_text(&self.config_path, &json)?;

        tracing::info!(
            path = %self.config_path,
            entries = config.entries().len(),
            "Wrote project config"
        );
        Ok(true)
    }

    /// Path of the persistent document.
    pub fn config_path(&self) -> &NormalizedPath {
        &self.config_path
    }

    /// The in-memory document, if it loaded.
    pub fn config(&self) -> Option<&ProjectPrivateConfig> {
        self.config.as_ref()
    }

    /// Entries merged so far, in merge order until `build_end` sorts them.
    pub fn entries(&self) -> &[upp_blocks::Entry] {
        self.config
            .as_ref()
            .map(ProjectPrivateConfig::entries)
            .unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}
