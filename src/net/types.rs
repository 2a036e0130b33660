//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Response types accept the extra fields the backend echoes (`project_id`,
//! `openai_file_id`, `token_type`) without requiring them, so older or newer
//! servers still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email/password pair for `/users/register` and `/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `/users/login`. A missing `access_token` means the login failed,
/// whatever the HTTP status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl LoginResponse {
    pub fn detail_text(&self) -> Option<String> {
        detail_string(self.detail.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProject<'a> {
    pub name: &'a str,
}

/// A named reusable snippet attached to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: i64,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Body for creating or updating a prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PromptDraft<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// An uploaded file as listed by `/projects/{id}/files`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub filename: String,
    /// Size in bytes.
    pub file_size: u64,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub openai_file_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub project_id: i64,
    pub message: &'a str,
}

/// `/chat` body; success carries `reply`, failure carries `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ChatReply {
    pub fn detail_text(&self) -> Option<String> {
        detail_string(self.detail.as_ref())
    }
}

/// Backend error envelope. `detail` is usually a string but validation
/// failures send a list, which is treated as absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        detail_string(self.detail.as_ref())
    }
}

/// A non-empty string `detail`. List-shaped validation details count as
/// absent.
fn detail_string(detail: Option<&serde_json::Value>) -> Option<String> {
    detail
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
