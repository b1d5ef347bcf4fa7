//! Folder and file discovery.
//!
//! A governed folder is any directory containing a rule file. Rule-file
//! discovery is recursive; content discovery within a folder is a single
//! directory level of `*.md` files. Both listings are sorted by name so
//! every run visits files in the same order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::RULES_FILE_NAME;
use crate::error::{LocGuardError, Result};

/// Recursively find all rule files under `root`.
///
/// # Errors
/// Returns an error if `root` is not a directory, the walk hits an I/O
/// failure, or no rule file exists anywhere under `root`.
pub fn discover_rule_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(LocGuardError::Config(format!(
            "Root folder not found: {}",
            root.display()
        )));
    }

    let mut rule_files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| LocGuardError::Io(e.into()))?;
        if entry.file_type().is_file() && entry.file_name() == RULES_FILE_NAME {
            rule_files.push(entry.into_path());
        }
    }

    if rule_files.is_empty() {
        return Err(LocGuardError::Config(format!(
            "No {RULES_FILE_NAME} file found under {}",
            root.display()
        )));
    }

    Ok(rule_files)
}

/// List the Markdown files directly inside `dir`, sorted by file name.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
