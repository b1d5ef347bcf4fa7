//! File resolution: mapping physical files to logical documents.
//!
//! Every Markdown file in a governed folder represents one logical
//! document in one language. The language is encoded as the last
//! period-delimited segment of the file stem (`about.fr.md`); a stem
//! without such a segment (`about.md`) is in the folder's default
//! language. All variants of one document share a root identity: the
//! path the document would have in the default language, whether or not
//! that file exists.

mod types;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::RuleSet;
use crate::error::{LocGuardError, Result};
use crate::output::Reporter;
use crate::{frontmatter, language, scanner};

pub use types::{Document, Folder, LanguageVariant};

/// Default extension appended when deriving a root identity.
const DEFAULT_EXTENSION: &str = "md";

/// Resolve the language a file represents.
///
/// # Errors
/// Returns [`LocGuardError::UnknownLanguage`] naming the file and the
/// folder's valid languages when the resolved code fails validation.
pub fn variant_language(path: &Path, rules: &RuleSet) -> Result<String> {
    let stem = file_stem(path);
    let code = stem
        .rsplit_once('.')
        .map_or(rules.default_language.as_str(), |(_, segment)| segment);

    language::validate_code(code, rules).map_err(|_| LocGuardError::UnknownLanguage {
        code: code.to_string(),
        path: path.to_path_buf(),
        valid: rules.languages_display(),
    })?;

    Ok(code.to_string())
}

/// Resolve the root document identity a file belongs to.
///
/// A default-language file is its own root. Any other variant maps to
/// the sibling path with the language segment stripped and the default
/// extension restored.
///
/// # Errors
/// Returns an error when the file's language cannot be resolved.
pub fn root_path(path: &Path, rules: &RuleSet) -> Result<PathBuf> {
    let code = variant_language(path, rules)?;
    if code == rules.default_language {
        return Ok(path.to_path_buf());
    }

    let stem = file_stem(path);
    let base = stem.rsplit_once('.').map_or(stem, |(base, _)| base);
    Ok(path.with_file_name(format!("{base}.{DEFAULT_EXTENSION}")))
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
}

/// Build a folder's document map from its directory listing.
///
/// Ignored files are reported and skipped before resolution. When two
/// files resolve to the same (root, language) pair, the later one
/// silently replaces the earlier.
///
/// # Errors
/// Returns an error when the directory cannot be listed, a file's
/// language cannot be resolved, a file cannot be read, or its front
/// matter is not valid YAML.
pub fn build_folder(
    path: &Path,
    rules: RuleSet,
    reporter: &impl Reporter,
) -> Result<Folder> {
    let mut documents: IndexMap<PathBuf, Document> = IndexMap::new();

    for file in scanner::list_markdown_files(path)? {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if rules.ignore.contains(name) {
            reporter.info(&format!("Ignoring {}", file.display()));
            continue;
        }

        let code = variant_language(&file, &rules)?;
        let root = root_path(&file, &rules)?;
        let variant = read_variant(&file, code.clone())?;

        documents
            .entry(root)
            .or_default()
            .variants
            .insert(code, variant);
    }

    Ok(Folder {
        path: path.to_path_buf(),
        rules,
        documents,
    })
}

fn read_variant(path: &Path, code: String) -> Result<LanguageVariant> {
    let content =
        std::fs::read_to_string(path).map_err(|source| LocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let doc = frontmatter::split(&content);
    let header = frontmatter::parse(doc.header).map_err(|e| LocGuardError::FrontMatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(LanguageVariant {
        language: code,
        path: path.to_path_buf(),
        raw_header: doc.header.to_string(),
        header,
        body: doc.body.to_string(),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
