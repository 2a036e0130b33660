//! Blocking alert/confirm notices.
//!
//! Prompt and file handlers report through these instead of inline text, the
//! way the management panels always have. Off-browser the notices are logged
//! and every confirm is declined.

/// Blocking notices shown to the user.
pub trait Dialogs {
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                return;
            }
        }
        leptos::logging::warn!("alert: {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                return window.confirm_with_message(message).unwrap_or(false);
            }
        }
        leptos::logging::warn!("confirm declined outside the browser: {message}");
        false
    }
}
