use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Name of the per-folder rule file. Every directory containing one
/// becomes a governed folder.
pub const RULES_FILE_NAME: &str = ".locguard.toml";

/// Name of the site-level configuration file, expected at the scan root.
pub const SITE_FILE_NAME: &str = "site.toml";

/// Per-folder rule set controlling which checks are active and their
/// parameters. One instance per governed folder, deserialized from
/// [`RULES_FILE_NAME`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    /// Language assumed for files without a language segment in their name.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// All language codes a document in this folder may be written in.
    /// Order is declaration order and drives completeness checks.
    #[serde(default = "default_languages")]
    pub languages: IndexSet<String>,

    /// Front-matter keys every document must carry, in declaration order.
    #[serde(default)]
    pub required_headers: Vec<String>,

    /// List key -> language code -> allowed item values.
    #[serde(default)]
    pub required_lists: IndexMap<String, IndexMap<String, IndexSet<String>>>,

    /// Pattern a `slug` header must fully match when present.
    #[serde(default = "default_slug_pattern")]
    pub slug_pattern: String,

    /// Header keys whose values must be unique across all documents
    /// in the folder.
    #[serde(default)]
    pub duplicate_keys: IndexSet<String>,

    /// File base names skipped before resolution (exact match).
    #[serde(default)]
    pub ignore: IndexSet<String>,

    /// Require a physical file for every declared language of every document.
    #[serde(default = "default_true")]
    pub enforce_language_structure: bool,

    /// Detect the body language locally and compare it against the
    /// language the file name declares.
    #[serde(default)]
    pub verify_body_language: bool,

    /// Remote spell-check settings.
    #[serde(default)]
    pub spellcheck: SpellcheckConfig,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: default_languages(),
            required_headers: Vec::new(),
            required_lists: IndexMap::new(),
            slug_pattern: default_slug_pattern(),
            duplicate_keys: IndexSet::new(),
            ignore: IndexSet::new(),
            enforce_language_structure: true,
            verify_body_language: false,
            spellcheck: SpellcheckConfig::default(),
        }
    }
}

/// Whether a required header must hold a scalar or a list value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Scalar,
    List,
}

/// A required header together with the kind of value it must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    pub key: String,
    pub kind: HeaderKind,
}

impl RuleSet {
    /// Expand `required_headers` into explicit descriptors: a key that also
    /// appears in `required_lists` must hold a list, anything else a scalar.
    #[must_use]
    pub fn header_rules(&self) -> Vec<HeaderRule> {
        self.required_headers
            .iter()
            .map(|key| HeaderRule {
                key: key.clone(),
                kind: if self.required_lists.contains_key(key) {
                    HeaderKind::List
                } else {
                    HeaderKind::Scalar
                },
            })
            .collect()
    }

    /// Comma-separated language list for diagnostics.
    #[must_use]
    pub fn languages_display(&self) -> String {
        self.languages
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Remote spell-check parameters. The request goes to an
/// OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpellcheckConfig {
    /// Delegate body checking to the remote capability.
    #[serde(default)]
    pub enabled: bool,

    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, 0.0-2.0.
    #[serde(default)]
    pub temperature: f64,

    /// Completion token budget per request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Prompt template. `{language}` and `{text}` are substituted before
    /// the request is sent.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SpellcheckConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            temperature: 0.0,
            max_tokens: default_max_tokens(),
            prompt: default_prompt(),
            endpoint: default_endpoint(),
        }
    }
}

/// Site-wide configuration, read once from the scan root before any
/// folder is processed. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub default_language: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_languages() -> IndexSet<String> {
    IndexSet::from(["en".to_string()])
}

fn default_slug_pattern() -> String {
    "^[a-z0-9-]+$".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_max_tokens() -> u32 {
    256
}

fn default_prompt() -> String {
    "Proofread the following {language} text for spelling and grammar mistakes. \
     Reply with exactly OK if the text is correct, otherwise describe every mistake.\n\n{text}"
        .to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
