//! Remote spell/grammar check capability.
//!
//! The whole document body is submitted to an OpenAI-compatible
//! chat-completions endpoint together with an optional expected-language
//! hint. A reply of `OK` means the text is clean; anything else is the
//! failure reason. The engine constructs one checker per folder that
//! enables it, before any document in that folder is checked.

use std::time::Duration;

use crate::config::SpellcheckConfig;
use crate::error::{LocGuardError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "LOCGUARD_API_KEY";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Outcome of a single remote check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The remote capability found nothing wrong.
    Passed,
    /// The remote capability rejected the text, with its reason.
    Failed(String),
}

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// POST a JSON body with bearer authentication and return the
    /// response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    fn post_json(&self, url: &str, api_key: &str, body: &serde_json::Value) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn post_json(&self, url: &str, api_key: &str, body: &serde_json::Value) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LocGuardError::Http(format!("Failed to create HTTP client: {e}")))?;

        let response = client
            .post(url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LocGuardError::Http(format!("Request timeout contacting {url}"))
                } else if e.is_connect() {
                    LocGuardError::Http(format!("Failed to connect to {url}"))
                } else {
                    LocGuardError::Http(format!("Request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocGuardError::Http(format!(
                "Request to {url} failed: HTTP {status}"
            )));
        }

        response
            .text()
            .map_err(|e| LocGuardError::Http(format!("Failed to read response from {url}: {e}")))
    }
}

/// Remote spell checker bound to one folder's configuration.
pub struct SpellChecker<'a, H: HttpClient> {
    http: &'a H,
    api_key: String,
    config: &'a SpellcheckConfig,
}

impl<'a, H: HttpClient> SpellChecker<'a, H> {
    #[must_use]
    pub const fn new(http: &'a H, api_key: String, config: &'a SpellcheckConfig) -> Self {
        Self {
            http,
            api_key,
            config,
        }
    }

    /// Submit a text for checking.
    ///
    /// # Errors
    /// Returns an error on transport failure or an unusable response.
    /// A well-formed rejection is a [`Verdict::Failed`], not an error.
    pub fn check(&self, text: &str, language_hint: Option<&str>) -> Result<Verdict> {
        let request = serde_json::json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "messages": [{
                "role": "user",
                "content": self.build_prompt(text, language_hint),
            }],
        });

        let response = self
            .http
            .post_json(&self.config.endpoint, &self.api_key, &request)?;
        let reply = extract_reply(&response)?;

        if reply.trim().trim_end_matches('.').eq_ignore_ascii_case("ok") {
            Ok(Verdict::Passed)
        } else {
            Ok(Verdict::Failed(reply.trim().to_string()))
        }
    }

    fn build_prompt(&self, text: &str, language_hint: Option<&str>) -> String {
        let language = language_hint.map_or_else(
            || "the original".to_string(),
            |code| {
                isolang::Language::from_639_1(code)
                    .map_or_else(|| code.to_string(), |lang| lang.to_name().to_string())
            },
        );

        self.config
            .prompt
            .replace("{language}", &language)
            .replace("{text}", text)
    }
}

fn extract_reply(response: &str) -> Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(response)
        .map_err(|e| LocGuardError::Http(format!("Malformed spell-check response: {e}")))?;

    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            LocGuardError::Http("Spell-check response carries no message content".to_string())
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
