//! Client-side view state and the handlers that drive it.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`, `chat`, `prompts`, `files`)
//! so each page depends on small focused models. Handlers are `async`
//! functions over an [`ApiClient`](crate::net::api::ApiClient) and return
//! values that pages write into signals; none of them touch the DOM.

pub mod auth;
pub mod chat;
pub mod files;
pub mod panel;
pub mod projects;
pub mod prompts;
pub mod session;
