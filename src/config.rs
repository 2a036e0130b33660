//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment at runtime, so overrides are read
//! with `option_env!` when the crate is compiled and fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_REGISTER_REDIRECT_MS: u64 = 1500;
pub const DEFAULT_SERVER_ERROR_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every endpoint path. Empty means same-origin.
    pub api_base: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// Pause between a successful registration and showing the login form.
    pub register_redirect_delay: Duration,
    /// How much of a non-JSON chat error body is shown to the user.
    pub server_error_preview_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            register_redirect_delay: Duration::from_millis(DEFAULT_REGISTER_REDIRECT_MS),
            server_error_preview_chars: DEFAULT_SERVER_ERROR_PREVIEW_CHARS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `CHATDESK_API_BASE`: backend origin/prefix, default same-origin
    /// - `CHATDESK_TOKEN_KEY`: storage key, default `token`
    /// - `CHATDESK_REGISTER_REDIRECT_MS`: default 1500
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CHATDESK_API_BASE"),
            option_env!("CHATDESK_TOKEN_KEY"),
            option_env!("CHATDESK_REGISTER_REDIRECT_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, token_key: Option<&str>, redirect_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let token_key = token_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map_or(defaults.token_key, str::to_owned);
        let register_redirect_delay = parse_millis(redirect_ms).unwrap_or(defaults.register_redirect_delay);

        Self {
            api_base,
            token_key,
            register_redirect_delay,
            server_error_preview_chars: defaults.server_error_preview_chars,
        }
    }
}

fn parse_millis(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}
