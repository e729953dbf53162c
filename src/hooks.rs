//! Built-in Hooks
//!
//! The shipped hook family: a Gemini reformatter, an OpenAI assistant
//! reply hook, and an OpenAI selection translator. Each constructor
//! owns its immutable defaults; the host can override the model and the
//! prompt template through settings.

use crate::capture::SelectionCapture;
use crate::hook::{HookConfig, PasteHook};
use crate::providers::{ApiShape, HttpProvider};
use std::time::Duration;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const OPENAI_RESPONSES_ENDPOINT: &str = "https://api.openai.com/v1/responses";

const GEMINI_INDICATOR: &str = "#4285F4";
const OPENAI_INDICATOR: &str = "#10A37F";

const DEFAULT_FORMAT_PROMPT: &str = "Clean up grammar, fix syntax, and return concise structured output (non-markdown).\n\
     Only output structured plain-text result and ready to paste.\n\
     Use the user request below.\n\nRequest:\n{text}";

const ASSISTANT_INSTRUCTIONS: &str = "Your name is Freeway. You are a helpful assistant.";

const DEFAULT_TRANSLATE_PROMPT: &str =
    "{text}. Output only the translation, nothing else.\n\nText:\n{selected_text}";

/// Reformats the paste buffer through Gemini generate-content.
///
/// Quick reformatting gets the short timeout; the trigger phrase that
/// woke the hook is stripped before templating.
pub fn gemini_formatter() -> PasteHook {
    let config = HookConfig {
        name: "Gemini".to_string(),
        default_model: "gemini-2.5-flash-lite".to_string(),
        default_prompt: Some(DEFAULT_FORMAT_PROMPT.to_string()),
        indicator_color: GEMINI_INDICATOR.to_string(),
        busy_status: "Sending to Gemini…".to_string(),
        success_status: "✓ Gemini formatted".to_string(),
        success_log: "Gemini response applied with model {model}.".to_string(),
        ..HookConfig::default()
    };
    PasteHook::new(
        config,
        Box::new(HttpProvider::new(
            ApiShape::GenerateContent,
            GEMINI_ENDPOINT,
            Duration::from_secs(15),
        )),
    )
}

/// Replies to the paste buffer as a conversational assistant
pub fn assistant_reply() -> PasteHook {
    let config = HookConfig {
        name: "OpenAI".to_string(),
        default_model: "gpt-5-nano".to_string(),
        instructions: Some(ASSISTANT_INSTRUCTIONS.to_string()),
        indicator_color: OPENAI_INDICATOR.to_string(),
        busy_status: "Thinking…".to_string(),
        success_status: "✓ Done".to_string(),
        success_log: "Got response from {model}.".to_string(),
        ..HookConfig::default()
    };
    PasteHook::new(
        config,
        Box::new(HttpProvider::new(
            ApiShape::Responses,
            OPENAI_RESPONSES_ENDPOINT,
            Duration::from_secs(30),
        )),
    )
}

/// Translates the highlighted selection; the paste buffer carries the
/// instruction ("Translate to Spanish"), the selection carries the text
pub fn selection_translator() -> PasteHook {
    let config = HookConfig {
        name: "OpenAI".to_string(),
        default_model: "gpt-5-nano".to_string(),
        default_prompt: Some(DEFAULT_TRANSLATE_PROMPT.to_string()),
        indicator_color: OPENAI_INDICATOR.to_string(),
        busy_status: "Translating…".to_string(),
        success_status: "✓ Translated".to_string(),
        success_log: "Translated selection with model {model}.".to_string(),
        empty_capture_status: "No selection to translate".to_string(),
        ..HookConfig::default()
    };
    PasteHook::new(
        config,
        Box::new(HttpProvider::new(
            ApiShape::Responses,
            OPENAI_RESPONSES_ENDPOINT,
            Duration::from_secs(30),
        )),
    )
    .with_capture(SelectionCapture::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{SELECTED_TEXT_PLACEHOLDER, TEXT_PLACEHOLDER};

    #[test]
    fn formatter_defaults() {
        let hook = gemini_formatter();
        let config = hook.config();
        assert_eq!(config.name, "Gemini");
        assert_eq!(config.default_model, "gemini-2.5-flash-lite");
        assert_eq!(config.indicator_color, GEMINI_INDICATOR);
        let template = config.default_prompt.as_deref().unwrap();
        assert!(template.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn assistant_sends_payload_verbatim() {
        let hook = assistant_reply();
        let config = hook.config();
        assert!(config.default_prompt.is_none());
        assert_eq!(config.instructions.as_deref(), Some(ASSISTANT_INSTRUCTIONS));
    }

    #[test]
    fn translator_template_binds_both_placeholders() {
        let hook = selection_translator();
        let config = hook.config();
        let template = config.default_prompt.as_deref().unwrap();
        assert!(template.contains(TEXT_PLACEHOLDER));
        assert!(template.contains(SELECTED_TEXT_PLACEHOLDER));
        assert_eq!(config.empty_capture_status, "No selection to translate");
    }
}
