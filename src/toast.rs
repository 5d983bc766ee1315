//! Copy-to-clipboard notification.
//!
//! The toast is shown for [`ToastTimings::visible_ms`], then gets the
//! `hidden` class so the stylesheet can fade it, and is removed
//! [`ToastTimings::fade_ms`] later. Only one toast exists at a time.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{TOAST_FADE_MS, TOAST_VISIBLE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTimings {
    pub visible_ms: u64,
    pub fade_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self { visible_ms: TOAST_VISIBLE_MS, fade_ms: TOAST_FADE_MS }
    }
}

impl ToastTimings {
    #[must_use]
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

/// Text placed after the check icon. Rendered as a text node, never as markup.
#[must_use]
pub fn message(copied: &str) -> String {
    format!(" Copied: {copied}")
}
