//! Session context carrying the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is loaded once at startup from a [`TokenStore`] and then passed
//! explicitly to every authenticated API call. Nothing validates it
//! client-side; the backend is the only judge.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::StorageError;

/// Durable storage for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the token cannot be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the token cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Load whatever token the store holds, if any.
    pub fn restore(store: &impl TokenStore) -> Self {
        Self { token: store.load().filter(|token| !token.is_empty()) }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a freshly issued token, then adopt it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails; the session is left
    /// unchanged in that case.
    pub fn establish(&mut self, store: &impl TokenStore, token: String) -> Result<(), StorageError> {
        store.save(&token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Drop the token locally and from storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if storage could not be cleared; the in-memory
    /// token is dropped regardless.
    pub fn end(&mut self, store: &impl TokenStore) -> Result<(), StorageError> {
        self.token = None;
        store.clear()
    }
}
