//! Language code validation and local body-language detection.

use crate::config::RuleSet;
use crate::error::{LocGuardError, Result};
use crate::markdown;

/// Bodies shorter than this are too small for reliable detection and
/// are never reported as a mismatch.
const MIN_DETECTION_CHARS: usize = 40;

/// Validate a language code against a folder's rule set.
///
/// Checks run in order and stop at the first failure: the code must be
/// non-empty, exactly two characters, lowercase ASCII letters, declared
/// in the rule set's language list, and a known ISO 639-1 language.
///
/// # Errors
/// Returns a distinct [`LocGuardError::InvalidLanguage`] for each failed
/// check. There is no recoverable outcome.
pub fn validate_code(code: &str, rules: &RuleSet) -> Result<()> {
    if code.is_empty() {
        return Err(invalid(code, "language code is empty"));
    }

    if code.chars().count() != 2 {
        return Err(invalid(code, "language code must be exactly two characters"));
    }

    if !code.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(invalid(
            code,
            "language code must consist of two lowercase letters",
        ));
    }

    if !rules.languages.contains(code) {
        return Err(invalid(
            code,
            &format!(
                "not declared in the folder's language list ({})",
                rules.languages_display()
            ),
        ));
    }

    if isolang::Language::from_639_1(code).is_none() {
        return Err(invalid(code, "not a known ISO 639-1 language"));
    }

    Ok(())
}

fn invalid(code: &str, reason: &str) -> LocGuardError {
    LocGuardError::InvalidLanguage {
        code: code.to_string(),
        reason: reason.to_string(),
    }
}

/// Detect the language of a Markdown body and return its two-letter
/// ISO 639-1 code.
///
/// Returns `None` when the prose is too short, detection is not
/// reliable, or the detected language has no two-letter code.
/// Inconclusive detection is not a mismatch.
#[must_use]
pub fn detect_body_language(body: &str) -> Option<String> {
    let text = markdown::plain_text(body);
    if text.chars().count() < MIN_DETECTION_CHARS {
        return None;
    }

    let info = whatlang::detect(&text)?;
    if !info.is_reliable() {
        return None;
    }

    isolang::Language::from_639_3(info.lang().code())
        .and_then(|lang| lang.to_639_1())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
