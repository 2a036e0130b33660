//! Reusable UI building blocks for the dashboard and chat pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared API client and session from context and call
//! into `state` handlers; they own only view-local signals.

pub mod file_panel;
pub mod project_selector;
pub mod prompt_panel;
pub mod status_line;
