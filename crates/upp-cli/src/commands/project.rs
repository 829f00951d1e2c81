//! Project root and options resolution shared by commands

use std::path::{Path, PathBuf};

use upp_core::ProjectOptions;
use upp_fs::{ConfigStore, NormalizedPath};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Options file picked up from the project root when `--config` is absent.
pub const OPTIONS_FILE: &str = "upp.toml";

/// Resolve the project root: `--root`/`VITE_ROOT_DIR`, else `cwd`.
pub fn resolve_root(args: &ProjectArgs, cwd: &Path) -> Result<PathBuf> {
    let root = match &args.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    };

    if !root.is_dir() {
        return Err(CliError::user(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }
    Ok(dunce::canonicalize(&root)?)
}

/// Layer options: defaults, then the options file, then CLI flags.
pub fn resolve_options(args: &ProjectArgs, root: &Path) -> Result<ProjectOptions> {
    let file = match &args.config {
        Some(path) if path.is_absolute() => Some(path.clone()),
        Some(path) => Some(root.join(path)),
        None => Some(root.join(OPTIONS_FILE)).filter(|path| path.is_file()),
    };

    let mut options = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading options file");
            ConfigStore::new().load::<ProjectOptions>(&NormalizedPath::new(path))?
        }
        None => ProjectOptions::default(),
    };

    if let Some(dir) = &args.dir {
        options.dir = dir.clone();
    }
    if let Some(lang) = args.lang {
        options.lang = Some(lang);
    }
    Ok(options)
}
