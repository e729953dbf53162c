//! Host Callback Surface
//!
//! The narrow interface a text-expansion host exposes to its paste
//! hooks: settings, the paste buffer, trigger metadata, status
//! reporting, and keystroke simulation. Hooks depend only on this
//! trait, never on a concrete host, so tests can substitute a double.

use serde::{Deserialize, Serialize};

/// Trigger phrase metadata supplied by the host per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// The configured phrase that activated the hook
    pub pattern: String,
}

/// Callbacks provided by the host runtime.
///
/// All operations are synchronous and side-effecting; the pipeline
/// treats them as non-failing.
pub trait Host: Send + Sync {
    /// Read a host-owned setting, `None` when unset
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Current paste-buffer content
    fn get_text(&self) -> String;

    /// Replace the paste-buffer content
    fn set_text(&self, text: &str);

    /// Trigger that activated this invocation, if any
    fn get_trigger(&self) -> Option<Trigger>;

    /// Append a line to the host log
    fn log(&self, message: &str);

    /// Show a short status message to the user
    fn set_status_text(&self, status: &str);

    /// Set the status indicator color (e.g. "#4285F4")
    fn set_indicator_color(&self, color: &str);

    /// Simulate pressing the named keys, in order
    fn press_keys(&self, keys: &[&str]);

    /// Simulate releasing the named keys, in order
    fn release_keys(&self, keys: &[&str]);
}
