//! Request/response seam between the API client and the HTTP stack.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpTransport`] fails with [`ApiError::Unavailable`]; tests
//! substitute a scripted transport instead.
//!
//! DESIGN
//! ======
//! Responses are buffered to text before anything inspects them. Callers need
//! the status, the content type, and sometimes the raw body (chat errors show
//! a preview of non-JSON pages), so decoding happens above this layer.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A local file chosen for upload, sent as multipart field `file`.
#[derive(Clone, Debug)]
pub struct FileUpload {
    pub filename: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

#[cfg(feature = "csr")]
impl FileUpload {
    pub fn from_file(file: web_sys::File) -> Self {
        Self { filename: file.name(), file }
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(FileUpload),
}

#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// The `Authorization` header value, when the request carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// A fully buffered HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server declared a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    /// Decode the body as JSON regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The backend's `detail` string, if the body carries one.
    pub fn detail(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.detail_text())
    }

    /// Pass success responses through; turn anything else into
    /// [`ApiError::Rejected`] carrying the backend detail.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for non-2xx statuses.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.ok() {
            return Ok(self);
        }
        Err(ApiError::Rejected { status: self.status, detail: self.detail() })
    }
}

/// Sends one request and buffers the response.
///
/// Implementations are single-threaded; browser futures are `!Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(auth) = request.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let prepared = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                // No explicit content type: the browser sets the multipart boundary.
                RequestBody::Multipart(upload) => {
                    let form = multipart_form(&upload)?;
                    builder.body(form)
                }
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, content_type, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn multipart_form(upload: &FileUpload) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(e.as_string().unwrap_or_else(|| format!("{e:?}")));
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &upload.file, &upload.filename)
        .map_err(js_error)?;
    Ok(form)
}
