//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` the request/response seam
//! (real HTTP in the browser, scripted in tests), and `api` one method per
//! backend endpoint.

pub mod api;
pub mod transport;
pub mod types;
