//! Error taxonomy shared by the network layer and the view handlers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. Handlers turn every variant into an
//! inline message or a blocking notice via [`ApiError::message_or`] and leave
//! the UI usable. No variant is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required field was missing; no request was issued.
    #[error("{0}")]
    Validation(&'static str),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// A response body could not be decoded.
    #[error("{0}")]
    Decode(String),
    /// Browser-only transport invoked outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Render the message shown to the user.
    ///
    /// Backend rejections surface their `detail` verbatim and fall back to the
    /// caller's generic message; transport and decode failures are prefixed
    /// with `Error: `.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => (*message).to_owned(),
            Self::Rejected { detail, .. } => detail.clone().unwrap_or_else(|| fallback.to_owned()),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => format!("Error: {self}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure to persist or clear the session token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}
