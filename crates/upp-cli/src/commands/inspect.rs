//! Inspect command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;
use upp_blocks::{find_blocks, transform_code};
use upp_fs::{NormalizedPath, SOURCE_DIR, logical_path};

use crate::cli::ProjectArgs;
use crate::commands::project::{resolve_options, resolve_root};
use crate::error::{CliError, Result};

/// Run the inspect command
///
/// Prints the entries `file` would contribute as JSON on stdout, with a
/// short block listing on stderr.
pub fn run_inspect(cwd: &Path, file: &Path, project: &ProjectArgs) -> Result<()> {
    let root = resolve_root(project, cwd)?;
    let options = resolve_options(project, &root)?;

    let file = if file.is_absolute() {
        file.to_path_buf()
    } else {
        cwd.join(file)
    };
    if !file.is_file() {
        return Err(CliError::user(format!("No such file: {}", file.display())));
    }
    let file = dunce::canonicalize(&file)?;

    let source_root = NormalizedPath::new(root.join(SOURCE_DIR));
    let normalized = NormalizedPath::new(&file);
    let path_name = logical_path(&source_root, &normalized).ok_or_else(|| {
        CliError::user(format!(
            "{} is not under {}",
            normalized,
            source_root
        ))
    })?;

    let code = fs::read_to_string(&file)?;
    for block in find_blocks(&code) {
        eprintln!(
            "{} line {} ({})",
            "block".dimmed(),
            block.start_line,
            block.lang().unwrap_or("default lang")
        );
    }

    let result = transform_code(&code, &path_name, options.transform_options())?;
    println!("{}", serde_json::to_string_pretty(&result.entries)?);
    Ok(())
}
