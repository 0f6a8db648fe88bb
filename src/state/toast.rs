//! Toast notification model and timings.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::SiteConfig;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 2_000;
pub const TOAST_EXIT_MS: u32 = 300;
pub const COPIED_MESSAGE: &str = "Email copied to clipboard!";

/// Inline style for the toast container. Animations `slideIn`/`slideOut`
/// are expected in the page stylesheet.
pub const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; background: var(--accent); \
     color: white; padding: 1rem 1.5rem; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.2); \
     z-index: 9999; animation: slideIn 0.3s ease;";
pub const TOAST_EXIT_ANIMATION: &str = "slideOut 0.3s ease";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Time on screen before the exit animation starts.
    pub duration_ms: u32,
    pub exit_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration_ms: Option<u32>) -> Self {
        Self {
            message: message.into(),
            duration_ms: duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
            exit_ms: TOAST_EXIT_MS,
        }
    }

    /// Toast using the page's configured default duration and exit delay.
    pub fn configured(config: &SiteConfig, message: impl Into<String>, duration_ms: Option<u32>) -> Self {
        Self::new(message, Some(duration_ms.unwrap_or(config.toast_duration_ms))).with_exit_ms(config.toast_exit_ms)
    }

    #[must_use]
    pub fn with_exit_ms(mut self, exit_ms: u32) -> Self {
        self.exit_ms = exit_ms;
        self
    }

    /// Time from insertion until the element leaves the DOM.
    pub fn removal_delay_ms(&self) -> u32 {
        self.duration_ms.saturating_add(self.exit_ms)
    }
}

/// Convert a JS number argument to a duration. Negative, non-finite or
/// missing values fall back to the default.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration_from_js(raw: Option<f64>) -> Option<u32> {
    let ms = raw?;
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    Some(ms.min(f64::from(u32::MAX)) as u32)
}
