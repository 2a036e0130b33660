//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! handler logic so the handlers stay testable natively.

pub mod dialog;
pub mod storage;
pub mod task;
pub mod text;
