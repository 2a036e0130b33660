//! Route-level page components.

pub mod chat;
pub mod dashboard;
pub mod home;
