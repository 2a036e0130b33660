//! Rendered state of a per-project list (prompts, files).

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::error::ApiError;

/// What a per-project list panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListPanel<T> {
    /// No project selected; nothing rendered.
    #[default]
    Cleared,
    /// Project selected, list empty.
    Empty,
    Items(Vec<T>),
    /// Loading failed; the panel shows a fixed failure line.
    Failed,
}

impl<T> ListPanel<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>, what: &str) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Items(items),
            Err(e) => {
                leptos::logging::warn!("loading {what} failed: {e}");
                Self::Failed
            }
        }
    }

    /// Whether the section heading is shown.
    pub fn has_heading(&self) -> bool {
        matches!(self, Self::Empty | Self::Items(_))
    }

    #[cfg(test)]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }
}

/// Sequence number of the newest list load for a panel.
///
/// Switching projects quickly can leave an earlier load in flight; its
/// result is dropped unless its ticket is still the latest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Start a load, superseding any load still in flight.
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Parse a project `<select>` value; empty or non-numeric means "none".
pub fn parse_project_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
