//! Provider Clients
//!
//! HTTP access to LLM text endpoints. Two wire shapes are supported:
//! the generate-content style (a "contents"/"parts" request tree with
//! the credential in the query string) and the responses style (an
//! "input" string plus optional instructions, bearer credential).
//! Response payloads are traversed defensively: each known shape
//! contributes one extraction strategy, tried in order, and the first
//! non-empty text wins.

use crate::error::{HookError, HookResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Wire shape of the target endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiShape {
    /// "contents"/"parts" request tree, credential as a query parameter
    GenerateContent,
    /// "input" plus optional "instructions", bearer credential
    Responses,
}

/// One provider call, scoped to a single invocation
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub credential: String,
    pub model: String,
    /// System instructions; only the responses shape sends them
    pub instructions: Option<String>,
    pub prompt: String,
}

/// Abstraction over the provider call, substituted by a stub in tests
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send one prompt and return the extracted reply text
    async fn generate(&self, request: &ProviderRequest) -> HookResult<String>;
}

/// HTTP provider client: a single POST per call on its own connection,
/// bounded by an explicit timeout, no retries.
pub struct HttpProvider {
    shape: ApiShape,
    endpoint: String,
    timeout: Duration,
}

impl HttpProvider {
    pub fn new(shape: ApiShape, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            shape,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    fn request_url(&self, request: &ProviderRequest) -> String {
        match self.shape {
            ApiShape::GenerateContent => format!(
                "{}/{}:generateContent?key={}",
                self.endpoint,
                urlencoding::encode(&request.model),
                urlencoding::encode(&request.credential)
            ),
            ApiShape::Responses => self.endpoint.clone(),
        }
    }

    fn request_body(&self, request: &ProviderRequest) -> Value {
        match self.shape {
            ApiShape::GenerateContent => json!({
                "contents": [{"parts": [{"text": request.prompt}]}],
                "generationConfig": {"temperature": 0.3}
            }),
            ApiShape::Responses => {
                let mut body = json!({
                    "model": request.model,
                    "input": request.prompt
                });
                if let Some(instructions) = &request.instructions {
                    body["instructions"] = Value::String(instructions.clone());
                }
                body
            }
        }
    }
}

#[async_trait]
impl TextProvider for HttpProvider {
    async fn generate(&self, request: &ProviderRequest) -> HookResult<String> {
        let client = reqwest::Client::new();
        let mut builder = client
            .post(self.request_url(request))
            .json(&self.request_body(request))
            .timeout(self.timeout);

        if self.shape == ApiShape::Responses {
            builder = builder.bearer_auth(&request.credential);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HookError::Transport(e.to_string()))?;

        let status = response.status();
        // Best-effort decode; the body is diagnostic detail either way.
        let body_text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Provider API error ({}): {}", status, body_text);
            return Err(HookError::Http {
                status: status.as_u16(),
                body: body_text,
            });
        }

        debug!("Provider raw body: {}", body_text);

        let payload: Value = serde_json::from_str(&body_text)?;
        extract_text(&payload).ok_or(HookError::EmptyResponse)
    }
}

/// Extraction strategies, one per known response shape, tried in order
const EXTRACTORS: &[fn(&Value) -> Option<String>] =
    &[extract_generate_content, extract_responses];

/// Pull the first non-empty text out of a provider payload, trimmed
pub fn extract_text(payload: &Value) -> Option<String> {
    EXTRACTORS.iter().find_map(|extract| extract(payload))
}

/// `candidates[*].content.parts[*].text`
fn extract_generate_content(payload: &Value) -> Option<String> {
    for candidate in payload.get("candidates")?.as_array()? {
        let parts = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array);
        let Some(parts) = parts else { continue };
        for part in parts {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                let text = text.trim();
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
    }
    None
}

/// `output[*].content[*].text` where the output item is a message and
/// the content entry is an output_text
fn extract_responses(payload: &Value) -> Option<String> {
    for item in payload.get("output")?.as_array()? {
        if item.get("type").and_then(Value::as_str) != Some("message") {
            continue;
        }
        let Some(content) = item.get("content").and_then(Value::as_array) else {
            continue;
        };
        for entry in content {
            if entry.get("type").and_then(Value::as_str) != Some("output_text") {
                continue;
            }
            if let Some(text) = entry.get("text").and_then(Value::as_str) {
                let text = text.trim();
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
    }
    None
}
