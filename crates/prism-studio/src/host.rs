//! Host-side collaborators: notifications, clipboard, lifecycle.
//!
//! Every facility is optional. A [`Host`] with nothing installed still runs
//! every command; copies and notifications are skipped with a log line.

use anyhow::{Context, Result};
use serde_json::Value;

/// Title attached to user-facing notifications.
pub const APP_TITLE: &str = "Prism";

/// Fire-and-forget user notification channel.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Writes notifications to the log at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        log::info!("[{title}] {body}");
    }
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard via `arboard`.
///
/// The handle is opened lazily so headless sessions only fail when they
/// actually try to copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("opening system clipboard")?);
        }
        if let Some(cb) = self.inner.as_mut() {
            cb.set_text(text.to_owned()).context("writing to system clipboard")?;
        }
        Ok(())
    }
}

/// Optional host facilities handed to a session.
#[derive(Default)]
pub struct Host {
    notifier: Option<Box<dyn Notifier>>,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl Host {
    /// No notifier, no clipboard.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    /// Lifecycle hook run when the tool is activated. `params` is opaque.
    pub fn on_enter(&self, params: &Value) {
        log::info!("gradient studio activated");
        log::debug!("activation params: {params}");
    }

    pub fn notify(&self, body: &str) {
        match &self.notifier {
            Some(n) => n.notify(APP_TITLE, body),
            None => log::debug!("no notifier installed, dropping {body:?}"),
        }
    }

    /// Copies `text` if a clipboard is installed. Returns whether it was copied.
    pub fn copy(&mut self, text: &str) -> Result<bool> {
        match self.clipboard.as_mut() {
            Some(cb) => {
                cb.set_text(text)?;
                Ok(true)
            }
            None => {
                log::warn!("no clipboard available, output not copied");
                Ok(false)
            }
        }
    }
}
