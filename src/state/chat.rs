//! Chat panel state and the send handler.
//!
//! DESIGN
//! ======
//! Each send takes a ticket from [`ChatState::begin`]. Results carry their
//! ticket back and are dropped unless it is still the latest, so a slow
//! earlier reply cannot overwrite a newer one.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiClient;
use crate::net::transport::{ApiResponse, Transport};
use crate::net::types::ChatReply;
use crate::state::panel::parse_project_id;
use crate::state::session::Session;
use crate::util::text::preview;

pub const THINKING: &str = "Thinking...";
pub const ENTER_MESSAGE: &str = "Please enter a message";
pub const SELECT_PROJECT: &str = "Please select a project";
pub const NO_RESPONSE: &str = "No response";
pub const RESPONSE_FAILED: &str = "Error getting response";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    Reply(String),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Text in the message box.
    pub draft: String,
    /// Reply area; shows the thinking placeholder while a send is in flight.
    pub response: String,
    /// Error line; empty when there is nothing to report.
    pub error: String,
    ticket: u64,
}

impl ChatState {
    /// Start a send: clear the error, show the placeholder, and hand out a
    /// ticket that supersedes any send still in flight.
    pub fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.error.clear();
        self.response = THINKING.to_owned();
        self.ticket
    }

    /// Report a local validation failure without touching the reply area.
    pub fn reject(&mut self, notice: &str) {
        self.error = notice.to_owned();
    }

    pub fn in_flight(&self) -> bool {
        self.response == THINKING
    }

    /// Apply the result of send `ticket`. Returns `false` if a newer send
    /// has started since, in which case nothing changes.
    pub fn finish(&mut self, ticket: u64, outcome: ChatOutcome) -> bool {
        if ticket != self.ticket {
            leptos::logging::log!("dropping superseded chat result {ticket} (latest {})", self.ticket);
            return false;
        }
        match outcome {
            ChatOutcome::Reply(reply) => {
                self.response = reply;
                self.draft.clear();
            }
            ChatOutcome::Failed(error) => {
                self.error = error;
                self.response.clear();
            }
        }
        true
    }
}

/// Check the message and project selection before sending.
///
/// # Errors
///
/// Returns the inline notice for an empty message or a missing project.
pub fn validate_chat_input(message: &str, project_id: &str) -> Result<i64, &'static str> {
    if message.is_empty() {
        return Err(ENTER_MESSAGE);
    }
    parse_project_id(project_id).ok_or(SELECT_PROJECT)
}

/// Interpret a `/chat` response.
///
/// Bodies not declared as JSON are unexpected server pages; only the first
/// `preview_chars` characters are shown.
pub fn classify_chat_response(resp: &ApiResponse, preview_chars: usize) -> ChatOutcome {
    if !resp.is_json() {
        leptos::logging::warn!("chat: non-JSON response with status {}", resp.status);
        return ChatOutcome::Failed(format!("Server error: {}", preview(&resp.body, preview_chars)));
    }
    let body: ChatReply = match resp.json() {
        Ok(body) => body,
        Err(e) => return ChatOutcome::Failed(e.message_or(RESPONSE_FAILED)),
    };
    if !resp.ok() {
        return ChatOutcome::Failed(body.detail_text().unwrap_or_else(|| RESPONSE_FAILED.to_owned()));
    }
    ChatOutcome::Reply(body.reply.filter(|r| !r.is_empty()).unwrap_or_else(|| NO_RESPONSE.to_owned()))
}

/// Send one message to the project's assistant.
pub async fn send_message<T: Transport>(
    api: &ApiClient<T>,
    session: &Session,
    project_id: i64,
    message: &str,
    preview_chars: usize,
) -> ChatOutcome {
    match api.chat(session, project_id, message).await {
        Ok(resp) => classify_chat_response(&resp, preview_chars),
        Err(e) => {
            leptos::logging::warn!("chat request failed: {e}");
            ChatOutcome::Failed(e.message_or(RESPONSE_FAILED))
        }
    }
}
