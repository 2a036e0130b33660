//! Register/login handlers and the state of the sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route shows either the login or the register panel plus one
//! status line. A successful login is the only place a token is issued.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::state::session::{Session, TokenStore};

pub const FILL_ALL_FIELDS: &str = "Please fill all fields";
pub const REGISTER_SUCCESS: &str = "Registration successful! Please login.";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/";

/// Which form the sign-in page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Error,
}

/// A single line of feedback under the auth forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Neutral }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }
}

/// What the page does after a handler finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStep {
    Stay,
    ShowLoginAfter(Duration),
    Navigate(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub message: Option<StatusMessage>,
    pub next: AuthStep,
}

impl AuthOutcome {
    fn stay(message: StatusMessage) -> Self {
        Self { message: Some(message), next: AuthStep::Stay }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub panel: AuthPanel,
    pub message: Option<StatusMessage>,
    pub busy: bool,
}

impl AuthState {
    pub fn show_register(&mut self) {
        self.panel = AuthPanel::Register;
        self.message = None;
    }

    pub fn show_login(&mut self) {
        self.panel = AuthPanel::Login;
        self.message = None;
    }

    pub fn apply(&mut self, outcome: &AuthOutcome) {
        self.busy = false;
        self.message.clone_from(&outcome.message);
    }
}

/// Both fields must be present; whitespace counts as present.
///
/// # Errors
///
/// Returns the fill-all-fields notice when either field is empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(())
}

/// Register a new account.
///
/// On success the page should switch to the login panel after
/// `redirect_delay`.
pub async fn register<T: Transport>(
    api: &ApiClient<T>,
    email: &str,
    password: &str,
    redirect_delay: Duration,
) -> AuthOutcome {
    if let Err(notice) = validate_credentials(email, password) {
        return AuthOutcome::stay(StatusMessage::neutral(notice));
    }

    match api.register(email, password).await {
        Ok(()) => {
            leptos::logging::log!("registration accepted");
            AuthOutcome {
                message: Some(StatusMessage::success(REGISTER_SUCCESS)),
                next: AuthStep::ShowLoginAfter(redirect_delay),
            }
        }
        Err(e) => {
            leptos::logging::warn!("registration failed: {e}");
            AuthOutcome::stay(StatusMessage::error(e.message_or(REGISTER_FAILED)))
        }
    }
}

/// Log in and, when the backend issues a token, persist it into `session`.
///
/// A response without `access_token` is a failure even with HTTP 200.
pub async fn login<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    session: &mut Session,
    store: &S,
    email: &str,
    password: &str,
) -> AuthOutcome {
    if let Err(notice) = validate_credentials(email, password) {
        return AuthOutcome::stay(StatusMessage::neutral(notice));
    }

    let body = match api.login(email, password).await {
        Ok(body) => body,
        Err(e) => {
            leptos::logging::warn!("login request failed: {e}");
            return AuthOutcome::stay(StatusMessage::error(e.message_or(LOGIN_FAILED)));
        }
    };

    let Some(token) = body.access_token.clone().filter(|t| !t.is_empty()) else {
        let text = body.detail_text().unwrap_or_else(|| LOGIN_FAILED.to_owned());
        return AuthOutcome::stay(StatusMessage::error(text));
    };

    if let Err(e) = session.establish(store, token) {
        leptos::logging::error!("could not persist session token: {e}");
        return AuthOutcome::stay(StatusMessage::error(format!("Error: {e}")));
    }
    AuthOutcome { message: None, next: AuthStep::Navigate(DASHBOARD_PATH) }
}

/// Forget the token locally; the backend keeps no session to revoke.
pub fn sign_out<S: TokenStore>(session: &mut Session, store: &S) -> &'static str {
    if let Err(e) = session.end(store) {
        leptos::logging::warn!("could not clear stored token: {e}");
    }
    HOME_PATH
}
