//! Build command implementation

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;
use upp_core::ProjectPrivatePlugin;
use upp_fs::{NormalizedPath, SOURCE_DIR, io, is_eligible};
use walkdir::WalkDir;

use crate::cli::ProjectArgs;
use crate::commands::project::{resolve_options, resolve_root};
use crate::error::Result;

/// What one build did, for display or `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    /// Eligible component files visited
    pub files_scanned: usize,
    /// Components whose blocks produced at least one value
    pub files_changed: usize,
    /// Entries in the final list
    pub entries: usize,
    pub config_path: String,
    /// Whether the configuration document was written
    pub config_written: bool,
}

/// Run the build command
pub fn run_build(cwd: &Path, project: &ProjectArgs, out: Option<&Path>, json: bool) -> Result<()> {
    let summary = build(cwd, project, out)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} component(s) scanned, {} changed",
        "=>".blue().bold(),
        summary.files_scanned,
        summary.files_changed
    );
    if summary.config_written {
        println!(
            "{} Wrote {} entr{} to {}",
            "OK".green().bold(),
            summary.entries,
            if summary.entries == 1 { "y" } else { "ies" },
            summary.config_path.cyan()
        );
    } else {
        println!(
            "{} {} was not updated",
            "!!".yellow().bold(),
            summary.config_path.cyan()
        );
    }
    Ok(())
}

/// Drive one plugin build over `<root>/src`.
pub fn build(cwd: &Path, project: &ProjectArgs, out: Option<&Path>) -> Result<BuildSummary> {
    let root = resolve_root(project, cwd)?;
    let options = resolve_options(project, &root)?;
    let mut plugin = ProjectPrivatePlugin::new(&root, options);

    let source_root = root.join(SOURCE_DIR);
    let out_dir = out.map(|dir| if dir.is_absolute() { dir.to_path_buf() } else { cwd.join(dir) });

    let mut files_scanned = 0;
    let mut files_changed = 0;

    for path in component_files(&source_root)? {
        files_scanned += 1;
        let code = fs::read_to_string(&path)?;

        let Some(cleaned) = plugin.transform(&path, &code)? else {
            continue;
        };
        files_changed += 1;

        if let Some(out_dir) = &out_dir {
            let relative = path.strip_prefix(&source_root).unwrap_or(&path);
            let target = NormalizedPath::new(out_dir.join(relative));
            io::write_text(&target, &cleaned)?;
            tracing::debug!(target = %target, "Wrote stripped component");
        }
    }

    let config_written = plugin.build_end()?;

    Ok(BuildSummary {
        files_scanned,
        files_changed,
        entries: plugin.entries().len(),
        config_path: plugin.config_path().to_string(),
        config_written,
    })
}

/// Eligible component files under `source_root`, in a stable order.
fn component_files(source_root: &Path) -> Result<Vec<PathBuf>> {
    if !source_root.is_dir() {
        tracing::warn!(path = %source_root.display(), "Source directory not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_eligible(&NormalizedPath::new(entry.path())) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
