//! Test Doubles
//!
//! A recording mock host, a scripted provider, and a fixed clipboard
//! for driving hook invocations deterministically.

use async_trait::async_trait;
use pasteflow::capture::{CaptureDelays, ClipboardReader};
use pasteflow::error::{HookError, HookResult};
use pasteflow::host::{Host, Trigger};
use pasteflow::providers::{ProviderRequest, TextProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

/// Install the fmt subscriber once so `RUST_LOG` works under tests
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Host double that records every side effect for verification
#[derive(Default)]
pub struct MockHost {
    pub settings: HashMap<String, String>,
    pub trigger: Option<Trigger>,
    pub text: Mutex<String>,
    pub logs: Mutex<Vec<String>>,
    pub statuses: Mutex<Vec<String>>,
    pub colors: Mutex<Vec<String>>,
    pub pressed: Mutex<Vec<Vec<String>>>,
    pub released: Mutex<Vec<Vec<String>>>,
}

impl MockHost {
    pub fn new(text: &str) -> Self {
        Self {
            text: Mutex::new(text.to_string()),
            ..Self::default()
        }
    }

    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_trigger(mut self, pattern: &str) -> Self {
        self.trigger = Some(Trigger {
            pattern: pattern.to_string(),
        });
        self
    }

    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn last_status(&self) -> Option<String> {
        self.statuses().last().cloned()
    }

    pub fn colors(&self) -> Vec<String> {
        self.colors.lock().unwrap().clone()
    }
}

impl Host for MockHost {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    fn get_text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    fn get_trigger(&self) -> Option<Trigger> {
        self.trigger.clone()
    }

    fn log(&self, message: &str) {
        self.logs.lock().unwrap().push(message.to_string());
    }

    fn set_status_text(&self, status: &str) {
        self.statuses.lock().unwrap().push(status.to_string());
    }

    fn set_indicator_color(&self, color: &str) {
        self.colors.lock().unwrap().push(color.to_string());
    }

    fn press_keys(&self, keys: &[&str]) {
        self.pressed
            .lock()
            .unwrap()
            .push(keys.iter().map(|k| k.to_string()).collect());
    }

    fn release_keys(&self, keys: &[&str]) {
        self.released
            .lock()
            .unwrap()
            .push(keys.iter().map(|k| k.to_string()).collect());
    }
}

/// Provider double that returns a scripted outcome and records requests
pub struct StubProvider {
    response: Mutex<Option<HookResult<String>>>,
    /// Requests seen, shared so tests keep a handle after boxing
    pub requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            response: Mutex::new(Some(Ok(text.to_string()))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: HookError) -> Self {
        Self {
            response: Mutex::new(Some(Err(err))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextProvider for StubProvider {
    async fn generate(&self, request: &ProviderRequest) -> HookResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(HookError::EmptyResponse))
    }
}

/// Clipboard double with fixed content
pub struct FakeClipboard {
    content: String,
}

impl FakeClipboard {
    pub fn with_text(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::with_text("")
    }
}

#[async_trait]
impl ClipboardReader for FakeClipboard {
    async fn read_text(&self) -> String {
        self.content.clone()
    }
}

/// Delays for tests: no settle waits at all
pub fn zero_delays() -> CaptureDelays {
    CaptureDelays {
        press_settle: Duration::ZERO,
        release_settle: Duration::ZERO,
    }
}
