//! Trigger Stripping
//!
//! Removes the configured trigger phrase from the front of captured
//! text. Users type triggers loosely ("hey, freeway!" for a configured
//! "hey freeway"), so the prefix check runs on punctuation-free
//! normalized text while the cut point is computed against the original
//! text, to avoid losing real content.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::debug;

lazy_static! {
    static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s]").expect("valid punctuation regex");
}

/// Strip `pattern` from the start of `text` if present.
///
/// Returns `text` unchanged when either side is empty, when the
/// normalized text does not start with the normalized pattern, or when
/// the tolerant match cannot find a cut point. Never fails.
pub fn strip_trigger_prefix(text: &str, pattern: &str) -> String {
    if text.is_empty() || pattern.is_empty() {
        return text.to_string();
    }

    let text_norm = normalize(text);
    let pattern_norm = normalize(pattern);

    if !text_norm.starts_with(&pattern_norm) {
        return text.to_string();
    }

    let tokens: Vec<&str> = pattern_norm.split_whitespace().collect();
    if tokens.is_empty() {
        return text.to_string();
    }

    // Match the pattern words in order against the original text,
    // bridging any punctuation or spacing the user actually typed.
    let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    let source = format!(r"^\s*{}[^\w]*", escaped.join(r"[^\w]*"));

    let matcher = match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            debug!("Trigger regex failed to build: {}", e);
            return text.to_string();
        }
    };

    match matcher.find(text) {
        Some(m) => text[m.end()..].trim_start().to_string(),
        // The normalized prefix check can pass while the tolerant match
        // finds no cut point (punctuation shapes the tokenizer cannot
        // bridge); degrade to a no-op rather than cut blindly.
        None => text.to_string(),
    }
}

/// Remove punctuation, trim, and lowercase for the prefix comparison
fn normalize(s: &str) -> String {
    PUNCT_RE.replace_all(s, "").trim().to_lowercase()
}
