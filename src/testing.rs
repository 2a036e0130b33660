//! Test doubles for the transport, token storage and dialog seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::error::{ApiError, StorageError};
use crate::net::api::ApiClient;
use crate::net::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::state::session::TokenStore;
use crate::util::dialog::Dialogs;

/// Transport that replays scripted responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn push(&self, response: Result<ApiResponse, ApiError>) -> &Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(ApiResponse {
            status,
            content_type: Some("application/json".to_owned()),
            body: body.to_string(),
        }))
    }

    pub fn push_text(&self, status: u16, content_type: &str, body: &str) -> &Self {
        self.push(Ok(ApiResponse {
            status,
            content_type: Some(content_type.to_owned()),
            body: body.to_owned(),
        }))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// JSON body of the `index`th request.
    pub fn json_body(&self, index: usize) -> serde_json::Value {
        match &self.requests.borrow()[index].body {
            RequestBody::Json(value) => value.clone(),
            other => panic!("expected JSON body, got {other:?}"),
        }
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

pub fn mock_client() -> ApiClient<MockTransport> {
    ApiClient::new("", MockTransport::default())
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    pub token: RefCell<Option<String>>,
    pub fail_writes: Cell<bool>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Dialogs that answer every confirm with a fixed choice and record alerts.
pub struct ScriptedDialogs {
    pub confirm_answer: bool,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(confirm_answer: bool) -> Self {
        Self { confirm_answer, alerts: RefCell::default(), confirms: RefCell::default() }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.confirm_answer
    }
}
