//! REST API client for the project/chat backend.
//!
//! One method per endpoint. Authenticated calls take the caller's
//! [`Session`] explicitly and attach its token as a bearer credential; a
//! session with no token still sends the request and lets the backend reject
//! it.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. Non-2xx statuses become
//! [`ApiError::Rejected`] with the backend `detail`, except where the caller
//! needs the raw response (`login`, `chat`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, FileUpload, HttpTransport, Method, RequestBody, Transport};
use super::types::{ChatRequest, Credentials, FileRecord, LoginResponse, NewProject, Project, Prompt, PromptDraft};
use crate::error::ApiError;
use crate::state::session::Session;

pub const REGISTER_ENDPOINT: &str = "/users/register";
pub const LOGIN_ENDPOINT: &str = "/users/login";
pub const PROJECTS_ENDPOINT: &str = "/projects";
pub const CHAT_ENDPOINT: &str = "/chat";

fn project_prompts_endpoint(project_id: i64) -> String {
    format!("/projects/{project_id}/prompts")
}

fn prompt_endpoint(prompt_id: i64) -> String {
    format!("/projects/prompts/{prompt_id}")
}

fn project_files_endpoint(project_id: i64) -> String {
    format!("/projects/{project_id}/files")
}

fn file_endpoint(file_id: i64) -> String {
    format!("/projects/files/{file_id}")
}

fn json_body<T: Serialize>(value: &T) -> Result<RequestBody, ApiError> {
    serde_json::to_value(value)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    base: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        Self { base: base.into(), transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: session.and_then(Session::token).map(str::to_owned),
            body,
        };
        self.transport.send(request).await
    }

    /// Create an account via `POST /users/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = json_body(&Credentials { email, password })?;
        self.send(Method::Post, REGISTER_ENDPOINT, None, body)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Exchange credentials for a token via `POST /users/login`.
    ///
    /// The body is decoded whatever the status: token presence, not the
    /// status code, decides success.
    ///
    /// # Errors
    ///
    /// Returns a transport error, or [`ApiError::Decode`] for a non-JSON body.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = json_body(&Credentials { email, password })?;
        self.send(Method::Post, LOGIN_ENDPOINT, None, body).await?.json()
    }

    /// List the caller's projects via `GET /projects`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (e.g. 401 without a valid token), a
    /// transport error, or a decode error.
    pub async fn list_projects(&self, session: &Session) -> Result<Vec<Project>, ApiError> {
        self.send(Method::Get, PROJECTS_ENDPOINT, Some(session), RequestBody::Empty)
            .await?
            .error_for_status()?
            .json()
    }

    /// Create a project via `POST /projects`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn create_project(&self, session: &Session, name: &str) -> Result<(), ApiError> {
        let body = json_body(&NewProject { name })?;
        self.send(Method::Post, PROJECTS_ENDPOINT, Some(session), body)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// List prompts via `GET /projects/{id}/prompts`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`], a transport error, or a decode error.
    pub async fn list_prompts(&self, session: &Session, project_id: i64) -> Result<Vec<Prompt>, ApiError> {
        self.send(Method::Get, &project_prompts_endpoint(project_id), Some(session), RequestBody::Empty)
            .await?
            .error_for_status()?
            .json()
    }

    /// Create a prompt via `POST /projects/{id}/prompts`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn create_prompt(
        &self,
        session: &Session,
        project_id: i64,
        name: &str,
        content: &str,
    ) -> Result<(), ApiError> {
        let body = json_body(&PromptDraft { name, content })?;
        self.send(Method::Post, &project_prompts_endpoint(project_id), Some(session), body)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Replace a prompt's name and content via `PUT /projects/prompts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn update_prompt(
        &self,
        session: &Session,
        prompt_id: i64,
        name: &str,
        content: &str,
    ) -> Result<(), ApiError> {
        let body = json_body(&PromptDraft { name, content })?;
        self.send(Method::Put, &prompt_endpoint(prompt_id), Some(session), body)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Delete a prompt via `DELETE /projects/prompts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn delete_prompt(&self, session: &Session, prompt_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &prompt_endpoint(prompt_id), Some(session), RequestBody::Empty)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// List uploaded files via `GET /projects/{id}/files`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`], a transport error, or a decode error.
    pub async fn list_files(&self, session: &Session, project_id: i64) -> Result<Vec<FileRecord>, ApiError> {
        self.send(Method::Get, &project_files_endpoint(project_id), Some(session), RequestBody::Empty)
            .await?
            .error_for_status()?
            .json()
    }

    /// Upload one file as multipart field `file` via `POST /projects/{id}/files`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn upload_file(&self, session: &Session, project_id: i64, upload: FileUpload) -> Result<(), ApiError> {
        self.send(
            Method::Post,
            &project_files_endpoint(project_id),
            Some(session),
            RequestBody::Multipart(upload),
        )
        .await?
        .error_for_status()?;
        Ok(())
    }

    /// Delete an uploaded file via `DELETE /projects/files/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-OK status, or a transport error.
    pub async fn delete_file(&self, session: &Session, file_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &file_endpoint(file_id), Some(session), RequestBody::Empty)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Send a chat message via `POST /chat`.
    ///
    /// Returns the raw response; the chat view inspects its content type
    /// before decoding.
    ///
    /// # Errors
    ///
    /// Returns a transport error only.
    pub async fn chat(&self, session: &Session, project_id: i64, message: &str) -> Result<ApiResponse, ApiError> {
        let body = json_body(&ChatRequest { project_id, message })?;
        self.send(Method::Post, CHAT_ENDPOINT, Some(session), body).await
    }
}
