//! The validation engine.
//!
//! Walks governed folders in discovery order, builds each folder's
//! document index, and applies its rule set. The first fatal condition
//! aborts the remaining traversal; warnings go to the reporter and never
//! abort. Duplicate tracking is explicit per-folder state, created for
//! one folder's content pass and discarded with it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::{self, HeaderKind, HeaderRule, RuleSet, SiteConfig};
use crate::error::{LocGuardError, Result};
use crate::output::Reporter;
use crate::resolver::{self, Folder, LanguageVariant};
use crate::spellcheck::{API_KEY_ENV, HttpClient, SpellChecker, Verdict};
use crate::{frontmatter, language};

/// Cross-document duplicate state for one folder:
/// header key -> header value -> first file seen with that value.
#[derive(Debug, Default)]
pub struct DuplicateTable {
    entries: HashMap<String, HashMap<String, PathBuf>>,
}

impl DuplicateTable {
    /// Record (key, value) for `path`.
    ///
    /// # Errors
    /// Returns [`LocGuardError::DuplicateHeader`] when the pair was
    /// already recorded for a different file.
    pub fn record(&mut self, key: &str, value: &str, path: &Path) -> Result<()> {
        let by_value = self.entries.entry(key.to_string()).or_default();
        match by_value.get(value) {
            Some(first) if first != path => Err(LocGuardError::DuplicateHeader {
                key: key.to_string(),
                value: value.to_string(),
                first: first.clone(),
                second: path.to_path_buf(),
            }),
            Some(_) => Ok(()),
            None => {
                by_value.insert(value.to_string(), path.to_path_buf());
                Ok(())
            }
        }
    }
}

pub struct ValidationEngine<'a, R: Reporter, H: HttpClient> {
    reporter: &'a R,
    http: &'a H,
    site: &'a SiteConfig,
    root: &'a Path,
    api_key: Option<String>,
}

impl<'a, R: Reporter, H: HttpClient> ValidationEngine<'a, R, H> {
    #[must_use]
    pub const fn new(
        reporter: &'a R,
        http: &'a H,
        site: &'a SiteConfig,
        root: &'a Path,
        api_key: Option<String>,
    ) -> Self {
        Self {
            reporter,
            http,
            site,
            root,
            api_key,
        }
    }

    /// Validate every governed folder, in discovery order.
    ///
    /// # Errors
    /// Propagates the first fatal condition encountered anywhere in the
    /// walk.
    pub fn run(&self, rule_files: &[PathBuf]) -> Result<()> {
        for rule_file in rule_files {
            let folder_path = rule_file.parent().unwrap_or_else(|| Path::new("."));
            let rules = config::load_rule_set(rule_file)?;
            let folder = resolver::build_folder(folder_path, rules, self.reporter)?;

            self.reporter.info(&format!(
                "Validating {} ({} documents)",
                folder.path.display(),
                folder.documents.len()
            ));
            self.validate_folder(&folder)?;
            self.validate_folder_content(&folder)?;
        }
        Ok(())
    }

    /// Folder-structure validation: language configuration and
    /// per-document language completeness.
    ///
    /// # Errors
    /// Returns the first structural violation.
    pub fn validate_folder(&self, folder: &Folder) -> Result<()> {
        if folder.documents.is_empty() {
            self.reporter.warn(&format!(
                "Folder {} has no documents",
                folder.path.display()
            ));
        }

        if !folder.rules.enforce_language_structure {
            return Ok(());
        }

        language::validate_code(&folder.rules.default_language, &folder.rules)?;
        for code in &folder.rules.languages {
            language::validate_code(code, &folder.rules)?;
        }
        if folder.path == self.root {
            language::validate_code(&self.site.default_language, &folder.rules)?;
        }

        validate_list_scopes(&folder.rules)?;

        // Every declared language must have a physical file.
        for (root, doc) in &folder.documents {
            for code in &folder.rules.languages {
                if !doc.variants.contains_key(code) {
                    return Err(LocGuardError::MissingVariant {
                        root: root.clone(),
                        language: code.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Per-variant content validation over every document of the folder,
    /// in discovery order, against a fresh duplicate table.
    ///
    /// # Errors
    /// Returns the first content violation.
    pub fn validate_folder_content(&self, folder: &Folder) -> Result<()> {
        let slug_re = compile_full_match(&folder.rules.slug_pattern)?;
        let spell = self.spell_checker(&folder.rules)?;
        let header_rules = folder.rules.header_rules();
        let mut duplicates = DuplicateTable::default();

        for doc in folder.documents.values() {
            for variant in doc.variants.values() {
                self.validate_content(
                    variant,
                    &folder.rules,
                    &header_rules,
                    &slug_re,
                    spell.as_ref(),
                    &mut duplicates,
                )?;
            }
        }

        Ok(())
    }

    fn spell_checker<'b>(&'b self, rules: &'b RuleSet) -> Result<Option<SpellChecker<'b, H>>> {
        if !rules.spellcheck.enabled {
            return Ok(None);
        }

        let api_key = self.api_key.clone().ok_or_else(|| {
            LocGuardError::Config(format!(
                "Spell check is enabled but {API_KEY_ENV} is not set"
            ))
        })?;

        Ok(Some(SpellChecker::new(
            self.http,
            api_key,
            &rules.spellcheck,
        )))
    }

    fn validate_content(
        &self,
        variant: &LanguageVariant,
        rules: &RuleSet,
        header_rules: &[HeaderRule],
        slug_re: &Regex,
        spell: Option<&SpellChecker<'_, H>>,
        duplicates: &mut DuplicateTable,
    ) -> Result<()> {
        check_required_headers(variant, header_rules)?;
        check_required_lists(variant, rules)?;
        check_slug(variant, slug_re, &rules.slug_pattern)?;
        check_duplicates(variant, rules, duplicates)?;
        self.check_body(variant, rules, spell)
    }

    fn check_body(
        &self,
        variant: &LanguageVariant,
        rules: &RuleSet,
        spell: Option<&SpellChecker<'_, H>>,
    ) -> Result<()> {
        if let Some(checker) = spell {
            return match checker.check(&variant.body, Some(&variant.language)) {
                Ok(Verdict::Passed) => Ok(()),
                Ok(Verdict::Failed(reason)) => Err(LocGuardError::SpellCheck {
                    path: variant.path.clone(),
                    reason,
                }),
                Err(e) => Err(LocGuardError::SpellCheck {
                    path: variant.path.clone(),
                    reason: e.to_string(),
                }),
            };
        }

        if rules.verify_body_language
            && let Some(detected) = language::detect_body_language(&variant.body)
            && !detected.eq_ignore_ascii_case(&variant.language)
        {
            return Err(LocGuardError::BodyLanguage {
                path: variant.path.clone(),
                detected,
                declared: variant.language.clone(),
            });
        }

        Ok(())
    }
}

/// Cross-check `required_lists` scopes against the folder's language
/// set, in both directions.
fn validate_list_scopes(rules: &RuleSet) -> Result<()> {
    for (key, by_language) in &rules.required_lists {
        for code in &rules.languages {
            if !by_language.contains_key(code) {
                return Err(LocGuardError::ListScope {
                    key: key.clone(),
                    language: code.clone(),
                });
            }
        }
        for code in by_language.keys() {
            if !rules.languages.contains(code) {
                return Err(LocGuardError::Config(format!(
                    "Required list '{key}' declares values for '{code}', \
                     which is not in the folder's language list"
                )));
            }
        }
    }
    Ok(())
}

fn check_required_headers(variant: &LanguageVariant, header_rules: &[HeaderRule]) -> Result<()> {
    for rule in header_rules {
        if !frontmatter::contains(&variant.header, &rule.key) {
            return Err(LocGuardError::MissingHeader {
                key: rule.key.clone(),
                path: variant.path.clone(),
            });
        }

        match rule.kind {
            HeaderKind::Scalar => {
                let value = frontmatter::get_string(&variant.header, &rule.key);
                if value.is_none_or(|v| v.trim().is_empty()) {
                    return Err(LocGuardError::EmptyHeader {
                        key: rule.key.clone(),
                        path: variant.path.clone(),
                    });
                }
            }
            HeaderKind::List => {
                let items = frontmatter::get_list(&variant.header, &rule.key);
                if items.is_none_or(|items| items.is_empty()) {
                    return Err(LocGuardError::EmptyList {
                        key: rule.key.clone(),
                        path: variant.path.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_required_lists(variant: &LanguageVariant, rules: &RuleSet) -> Result<()> {
    for (key, by_language) in &rules.required_lists {
        let Some(allowed) = by_language.get(&variant.language) else {
            return Err(LocGuardError::ListScope {
                key: key.clone(),
                language: variant.language.clone(),
            });
        };

        let items = frontmatter::get_list(&variant.header, key).unwrap_or_default();
        if items.is_empty() {
            return Err(LocGuardError::EmptyList {
                key: key.clone(),
                path: variant.path.clone(),
            });
        }

        for item in items {
            if !allowed.contains(&item) {
                return Err(LocGuardError::DisallowedListItem {
                    key: key.clone(),
                    value: item,
                    language: variant.language.clone(),
                    path: variant.path.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_slug(variant: &LanguageVariant, slug_re: &Regex, pattern: &str) -> Result<()> {
    if let Some(slug) = frontmatter::get_string(&variant.header, "slug")
        && !slug_re.is_match(&slug)
    {
        return Err(LocGuardError::SlugMismatch {
            slug,
            pattern: pattern.to_string(),
            path: variant.path.clone(),
        });
    }
    Ok(())
}

fn check_duplicates(
    variant: &LanguageVariant,
    rules: &RuleSet,
    duplicates: &mut DuplicateTable,
) -> Result<()> {
    for key in &rules.duplicate_keys {
        if let Some(value) = frontmatter::get_string(&variant.header, key) {
            duplicates.record(key, &value, &variant.path)?;
        }
    }
    Ok(())
}

/// Compile a slug pattern so that matching means matching the whole
/// value, not a substring.
fn compile_full_match(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("\\A(?:{pattern})\\z")).map_err(|source| LocGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
