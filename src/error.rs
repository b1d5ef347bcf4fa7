use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_VALIDATION_FAILED};

#[derive(Error, Debug)]
pub enum LocGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },

    #[error("Invalid slug pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid language code '{code}': {reason}")]
    InvalidLanguage { code: String, reason: String },

    #[error("Unknown language '{code}' for file {} (valid languages: {valid})", path.display())]
    UnknownLanguage {
        code: String,
        path: PathBuf,
        valid: String,
    },

    #[error("Missing '{language}' variant for document {}", root.display())]
    MissingVariant { root: PathBuf, language: String },

    #[error("Required list '{key}' has no allowed values for language '{language}'")]
    ListScope { key: String, language: String },

    #[error("Missing required header '{key}' in {}", path.display())]
    MissingHeader { key: String, path: PathBuf },

    #[error("Required header '{key}' is empty in {}", path.display())]
    EmptyHeader { key: String, path: PathBuf },

    #[error("Required list '{key}' is empty in {}", path.display())]
    EmptyList { key: String, path: PathBuf },

    #[error(
        "Value '{value}' is not allowed in list '{key}' for language '{language}' in {}",
        path.display()
    )]
    DisallowedListItem {
        key: String,
        value: String,
        language: String,
        path: PathBuf,
    },

    #[error("Slug '{slug}' does not match pattern '{pattern}' in {}", path.display())]
    SlugMismatch {
        slug: String,
        pattern: String,
        path: PathBuf,
    },

    #[error(
        "Duplicate value '{value}' for header '{key}': first seen in {}, again in {}",
        first.display(),
        second.display()
    )]
    DuplicateHeader {
        key: String,
        value: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Body language of {} is '{detected}', expected '{declared}'", path.display())]
    BodyLanguage {
        path: PathBuf,
        detected: String,
        declared: String,
    },

    #[error("Spell check failed for {}: {reason}", path.display())]
    SpellCheck { path: PathBuf, reason: String },

    #[error("HTTP error: {0}")]
    Http(String),
}

impl LocGuardError {
    /// Process exit code for this error: rule violations map to the
    /// validation-failure code, everything else to the config/runtime code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::FileRead { .. }
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::FrontMatter { .. }
            | Self::InvalidPattern { .. }
            | Self::ListScope { .. }
            | Self::Http(_) => EXIT_CONFIG_ERROR,
            Self::InvalidLanguage { .. }
            | Self::UnknownLanguage { .. }
            | Self::MissingVariant { .. }
            | Self::MissingHeader { .. }
            | Self::EmptyHeader { .. }
            | Self::EmptyList { .. }
            | Self::DisallowedListItem { .. }
            | Self::SlugMismatch { .. }
            | Self::DuplicateHeader { .. }
            | Self::BodyLanguage { .. }
            | Self::SpellCheck { .. } => EXIT_VALIDATION_FAILED,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
