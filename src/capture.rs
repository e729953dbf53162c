//! Selection Capture
//!
//! Captures the highlighted selection by simulating a copy keystroke
//! and reading the system clipboard after short settle delays. There is
//! no OS signal that the clipboard has been updated after a simulated
//! copy; the delays are empirically tuned and overridable so tests can
//! substitute a deterministic clipboard with zero delay.

use crate::host::Host;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

/// Default copy key combination, interpreted by the host
const COPY_KEYS: &[&str] = &["Command", "C"];

/// Bound on the clipboard read
const CLIPBOARD_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads the system clipboard, yielding an empty string on any failure
#[async_trait]
pub trait ClipboardReader: Send + Sync {
    async fn read_text(&self) -> String;
}

/// OS clipboard reader with a bounded wait
pub struct SystemClipboard {
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            timeout: CLIPBOARD_READ_TIMEOUT,
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardReader for SystemClipboard {
    async fn read_text(&self) -> String {
        let read = tokio::task::spawn_blocking(|| {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.get_text()
        });

        match timeout(self.timeout, read).await {
            Ok(Ok(Ok(text))) => text,
            Ok(Ok(Err(e))) => {
                warn!("Clipboard read failed: {}", e);
                String::new()
            }
            Ok(Err(e)) => {
                warn!("Clipboard task failed: {}", e);
                String::new()
            }
            Err(_) => {
                warn!("Clipboard read timed out");
                String::new()
            }
        }
    }
}

/// Settle delays around the simulated copy keystroke
#[derive(Debug, Clone, Copy)]
pub struct CaptureDelays {
    /// Wait after pressing the combo, lets the host keystroke layer register it
    pub press_settle: Duration,
    /// Wait after releasing, lets the OS populate the clipboard
    pub release_settle: Duration,
}

impl Default for CaptureDelays {
    fn default() -> Self {
        Self {
            press_settle: Duration::from_millis(150),
            release_settle: Duration::from_millis(100),
        }
    }
}

/// Simulates a copy action and reads the clipboard
pub struct SelectionCapture {
    copy_keys: Vec<String>,
    delays: CaptureDelays,
    clipboard: Box<dyn ClipboardReader>,
}

impl SelectionCapture {
    pub fn new() -> Self {
        Self::with_parts(
            COPY_KEYS.iter().map(|k| k.to_string()).collect(),
            CaptureDelays::default(),
            Box::new(SystemClipboard::new()),
        )
    }

    /// Fully injected constructor, used by tests for deterministic capture
    pub fn with_parts(
        copy_keys: Vec<String>,
        delays: CaptureDelays,
        clipboard: Box<dyn ClipboardReader>,
    ) -> Self {
        Self {
            copy_keys,
            delays,
            clipboard,
        }
    }

    /// Simulate the copy combo and read the clipboard.
    ///
    /// Best-effort: an empty result means nothing was captured; the
    /// caller decides whether that turns into a skip.
    pub async fn capture(&self, host: &dyn Host) -> String {
        let keys: Vec<&str> = self.copy_keys.iter().map(String::as_str).collect();

        host.press_keys(&keys);
        sleep(self.delays.press_settle).await;
        host.release_keys(&keys);
        sleep(self.delays.release_settle).await;

        let text = self.clipboard.read_text().await;
        debug!("Captured {} clipboard characters", text.len());
        text
    }
}

impl Default for SelectionCapture {
    fn default() -> Self {
        Self::new()
    }
}
