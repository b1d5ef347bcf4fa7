//! Structured-text access over YAML front matter.
//!
//! Documents carry their metadata as a YAML block delimited by `---`
//! lines at the top of the file. This module splits a raw document into
//! header and body, parses the header, and answers key lookups. Missing
//! keys are absent values, never errors.

use serde_yaml::Value;

const DELIMITER: &str = "---";

/// A document split into its raw front-matter text and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw YAML between the delimiter lines, without the delimiters.
    pub header: &'a str,
    /// Everything after the closing delimiter (or the whole input when
    /// no front matter is present), with surrounding whitespace trimmed.
    pub body: &'a str,
}

/// Split a document into front matter and body.
///
/// A document without a leading `---` line, or without a closing one,
/// has no front matter: the header is empty and the whole input is the
/// body.
#[must_use]
pub fn split(text: &str) -> SplitDocument<'_> {
    let Some(rest) = strip_opening_delimiter(text) else {
        return SplitDocument {
            header: "",
            body: text.trim(),
        };
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return SplitDocument {
                header,
                body: body.trim(),
            };
        }
        offset += line.len();
    }

    // Unclosed front matter: treat the whole input as body.
    SplitDocument {
        header: "",
        body: text.trim(),
    }
}

fn strip_opening_delimiter(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }
    Some(&text[first.len()..])
}

/// Parse front-matter text into a structured root.
///
/// Empty or whitespace-only input parses to a null root, which behaves
/// as an empty mapping for all lookups.
///
/// # Errors
/// Returns an error when the text is not valid YAML.
pub fn parse(text: &str) -> Result<Value, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text)
}

/// Look up a scalar value by key. Numbers and booleans are rendered to
/// their string form; lists and mappings are not scalars.
#[must_use]
pub fn get_string(root: &Value, key: &str) -> Option<String> {
    match root.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Look up a list value by key. Every item is rendered to its string
/// form; a scalar or mapping under the key is not a list.
#[must_use]
pub fn get_list(root: &Value, key: &str) -> Option<Vec<String>> {
    let Value::Sequence(items) = root.get(key)? else {
        return None;
    };

    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
            })
            .collect(),
    )
}

/// Whether the root has any value under the key.
#[must_use]
pub fn contains(root: &Value, key: &str) -> bool {
    root.get(key).is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
