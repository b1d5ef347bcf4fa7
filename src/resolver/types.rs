use std::path::PathBuf;

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::config::RuleSet;

/// One physical file: one logical document in one language.
///
/// Built when the file is discovered and read; immutable thereafter and
/// scoped to the run.
#[derive(Debug, Clone)]
pub struct LanguageVariant {
    pub language: String,
    pub path: PathBuf,
    /// Raw YAML front-matter text, without delimiters.
    pub raw_header: String,
    /// Parsed front-matter root.
    pub header: Value,
    /// Document body with surrounding whitespace trimmed.
    pub body: String,
}

/// One logical content unit: a page and all its translations, keyed by
/// language code. At most one variant per language.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub variants: IndexMap<String, LanguageVariant>,
}

/// A governed directory: its rule set and its resolved documents, keyed
/// by root document identity in discovery order.
#[derive(Debug, Clone)]
pub struct Folder {
    pub path: PathBuf,
    pub rules: RuleSet,
    pub documents: IndexMap<PathBuf, Document>,
}
