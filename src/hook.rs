//! Hook Orchestration
//!
//! The per-hook entry point the host invokes before a paste. Runs the
//! pipeline to completion: guard checks, optional selection capture,
//! trigger stripping, prompt templating, one provider call, and the
//! final buffer/status writes. Every failure is absorbed at this
//! boundary; nothing propagates to the host.

use crate::capture::SelectionCapture;
use crate::error::HookError;
use crate::host::Host;
use crate::prompt::{self, SELECTED_TEXT_PLACEHOLDER, TEXT_PLACEHOLDER};
use crate::providers::{ProviderRequest, TextProvider};
use crate::trigger::strip_trigger_prefix;
use tracing::{debug, info};

/// Settings keys owned by the host
const API_KEY_SETTING: &str = "api_key";
const MODEL_SETTING: &str = "model";
const PROMPT_SETTING: &str = "prompt";

/// Error statuses are cut to fit the host status line
const STATUS_LIMIT: usize = 60;

/// Immutable per-hook configuration, owned by the hook's constructor
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Display name used in log lines ("Gemini", "OpenAI")
    pub name: String,
    /// Model used when the host has no `model` setting
    pub default_model: String,
    /// Prompt template; `None` sends the payload verbatim
    pub default_prompt: Option<String>,
    /// System instructions forwarded with every request
    pub instructions: Option<String>,
    /// Indicator color shown while the provider call is in flight
    pub indicator_color: String,
    pub busy_status: String,
    pub success_status: String,
    /// Success log line, may reference `{model}`
    pub success_log: String,
    /// Status shown while the selection is being copied
    pub capture_status: String,
    /// Neutral status when the capture comes back empty
    pub empty_capture_status: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            name: "Provider".to_string(),
            default_model: String::new(),
            default_prompt: None,
            instructions: None,
            indicator_color: "#808080".to_string(),
            busy_status: "Working…".to_string(),
            success_status: "✓ Done".to_string(),
            success_log: "Got response from {model}.".to_string(),
            capture_status: "Copying selection…".to_string(),
            empty_capture_status: "Nothing to process".to_string(),
        }
    }
}

/// One paste hook: the pipeline bound to its provider and configuration
pub struct PasteHook {
    config: HookConfig,
    provider: Box<dyn TextProvider>,
    capture: Option<SelectionCapture>,
}

impl PasteHook {
    pub fn new(config: HookConfig, provider: Box<dyn TextProvider>) -> Self {
        Self {
            config,
            provider,
            capture: None,
        }
    }

    /// Operate on the highlighted selection instead of the paste buffer alone
    pub fn with_capture(mut self, capture: SelectionCapture) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Run one invocation to completion, terminal on first exit.
    ///
    /// Configuration gaps skip with a log line only; failures after the
    /// busy notification end with a log line and a short error status.
    /// The paste buffer is written exactly once, on success.
    pub async fn run(&self, host: &dyn Host) {
        let Some(api_key) = setting(host, API_KEY_SETTING) else {
            host.log(&format!(
                "{} API key is missing; skipping.",
                self.config.name
            ));
            return;
        };

        let model =
            setting(host, MODEL_SETTING).unwrap_or_else(|| self.config.default_model.clone());

        let text = host.get_text();
        if text.trim().is_empty() {
            host.log("No text to process.");
            return;
        }

        let selected = match &self.capture {
            Some(capture) => {
                host.set_status_text(&self.config.capture_status);
                let captured = capture.capture(host).await.trim().to_string();
                if captured.is_empty() {
                    host.log("Clipboard is empty; skipping.");
                    host.set_status_text(&self.config.empty_capture_status);
                    return;
                }
                Some(captured)
            }
            None => None,
        };

        let payload = match host.get_trigger() {
            Some(trigger) if !trigger.pattern.is_empty() => {
                strip_trigger_prefix(&text, &trigger.pattern)
            }
            _ => text,
        };
        let payload = payload.trim().to_string();
        if payload.is_empty() {
            host.log(&format!(
                "No payload after trigger; skipping {}.",
                self.config.name
            ));
            return;
        }

        let template = setting(host, PROMPT_SETTING).or_else(|| self.config.default_prompt.clone());
        let prompt = match template {
            Some(template) => prompt::render(
                &template,
                &[
                    (TEXT_PLACEHOLDER, payload.as_str()),
                    (SELECTED_TEXT_PLACEHOLDER, selected.as_deref().unwrap_or_default()),
                ],
            ),
            None => payload,
        };

        host.set_status_text(&self.config.busy_status);
        host.set_indicator_color(&self.config.indicator_color);
        debug!("Dispatching {} request with model {}", self.config.name, model);

        let request = ProviderRequest {
            credential: api_key,
            model: model.clone(),
            instructions: self.config.instructions.clone(),
            prompt,
        };

        match self.provider.generate(&request).await {
            Ok(reply) => {
                host.set_text(&reply);
                host.log(&prompt::render(
                    &self.config.success_log,
                    &[("{model}", model.as_str())],
                ));
                host.set_status_text(&self.config.success_status);
                info!("{} hook finished with model {}", self.config.name, model);
            }
            Err(err) => {
                // Full detail to the log, a short line to the user, and
                // the buffer stays exactly as the host had it.
                host.log(&format!("{} error: {}", self.config.name, err));
                host.set_status_text(&error_status(&err));
            }
        }
    }
}

/// Read a setting, treating blank values as unset
fn setting(host: &dyn Host, key: &str) -> Option<String> {
    host.get_setting(key).filter(|value| !value.trim().is_empty())
}

/// Short user-facing failure status, capped at the host status width
fn error_status(err: &HookError) -> String {
    truncate_chars(&format!("Error: {}", err), STATUS_LIMIT)
}

fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
