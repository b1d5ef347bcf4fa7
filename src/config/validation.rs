//! Rule-set semantic validation.
//!
//! Validates that rule values are semantically usable after parsing.
//! The cross-language invariant between `required_lists` and `languages`
//! is deliberately NOT checked here: it is a folder-validation concern
//! and is enforced by the engine.

use regex::Regex;

use crate::error::{LocGuardError, Result};

use super::model::RuleSet;

/// Validates semantic correctness of a parsed rule set.
///
/// # Errors
/// Returns an error if the slug pattern does not compile, the spell-check
/// temperature is out of range, the prompt template lacks its `{text}`
/// placeholder, or both body-language checks are enabled at once.
pub fn validate_rule_set(rules: &RuleSet) -> Result<()> {
    Regex::new(&rules.slug_pattern).map_err(|source| LocGuardError::InvalidPattern {
        pattern: rules.slug_pattern.clone(),
        source,
    })?;

    if !(0.0..=2.0).contains(&rules.spellcheck.temperature) {
        return Err(LocGuardError::Config(format!(
            "spellcheck.temperature must be between 0.0 and 2.0, got {}",
            rules.spellcheck.temperature
        )));
    }

    if rules.spellcheck.enabled && !rules.spellcheck.prompt.contains("{text}") {
        return Err(LocGuardError::Config(
            "spellcheck.prompt must contain the {text} placeholder".to_string(),
        ));
    }

    // The two body checks are alternatives, never both.
    if rules.spellcheck.enabled && rules.verify_body_language {
        return Err(LocGuardError::Config(
            "verify_body_language and spellcheck.enabled are mutually exclusive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
