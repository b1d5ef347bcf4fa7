use std::path::Path;

use crate::error::{LocGuardError, Result};

use super::model::{RuleSet, SiteConfig};
use super::validation::validate_rule_set;

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Load and semantically validate a folder rule set.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or
/// fails semantic validation.
pub fn load_rule_set_with(fs: &impl FileSystem, path: &Path) -> Result<RuleSet> {
    if !fs.exists(path) {
        return Err(LocGuardError::Config(format!(
            "Rule file not found: {}",
            path.display()
        )));
    }

    let content = fs
        .read_to_string(path)
        .map_err(|source| LocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let rules: RuleSet = toml::from_str(&content)?;
    validate_rule_set(&rules)?;
    Ok(rules)
}

/// Load a rule set from the real filesystem.
///
/// # Errors
/// See [`load_rule_set_with`].
pub fn load_rule_set(path: &Path) -> Result<RuleSet> {
    load_rule_set_with(&RealFileSystem, path)
}

/// Load the site-level configuration.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not valid TOML.
pub fn load_site_config_with(fs: &impl FileSystem, path: &Path) -> Result<SiteConfig> {
    if !fs.exists(path) {
        return Err(LocGuardError::Config(format!(
            "Site configuration not found: {}",
            path.display()
        )));
    }

    let content = fs
        .read_to_string(path)
        .map_err(|source| LocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(toml::from_str(&content)?)
}

/// Load the site configuration from the real filesystem.
///
/// # Errors
/// See [`load_site_config_with`].
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    load_site_config_with(&RealFileSystem, path)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
