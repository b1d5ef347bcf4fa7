//! Markdown body parsing.
//!
//! The engine only needs the prose out of a document body: language
//! detection over raw Markdown is skewed by code blocks, inline code,
//! and raw HTML, so those are dropped from the extracted text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Extract prose text from a Markdown body.
///
/// Code blocks, inline code, and HTML are skipped; soft and hard breaks
/// become spaces; block boundaries become newlines.
#[must_use]
pub fn plain_text(body: &str) -> String {
    let mut text = String::new();
    let mut in_code_block = false;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(t) => {
                if !in_code_block {
                    text.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push('\n'),
            _ => {}
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
