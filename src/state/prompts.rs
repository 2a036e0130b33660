//! Prompt management for the selected project.
//!
//! Failures are reported through blocking [`Dialogs`] notices. Every failed
//! mutation, delete included, surfaces the backend `detail` when there is one.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::Prompt;
use crate::state::auth::FILL_ALL_FIELDS;
use crate::state::panel::{ListPanel, LoadTicket, parse_project_id};
use crate::state::session::Session;
use crate::util::dialog::Dialogs;

pub const HEADING: &str = "Prompts:";
pub const EMPTY_TEXT: &str = "No prompts yet. Create one above.";
pub const FAILED_TEXT: &str = "Error loading prompts";
pub const CONFIRM_DELETE: &str = "Delete this prompt?";
pub const CREATE_FAILED: &str = "Error creating prompt";
pub const UPDATE_FAILED: &str = "Error updating prompt";
pub const DELETE_FAILED: &str = "Error deleting prompt";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptsState {
    pub panel: ListPanel<Prompt>,
    pub name: String,
    pub content: String,
    /// Prompt being edited; `None` means the form creates a new prompt.
    pub editing: Option<i64>,
    loads: LoadTicket,
}

impl PromptsState {
    /// Load a prompt into the form for editing.
    pub fn edit(&mut self, prompt: &Prompt) {
        self.editing = Some(prompt.id);
        self.name.clone_from(&prompt.name);
        self.content.clone_from(&prompt.content);
    }

    /// Empty the form and leave edit mode.
    pub fn reset_form(&mut self) {
        self.editing = None;
        self.name.clear();
        self.content.clear();
    }

    /// A different project was selected. An edit in progress belongs to the
    /// previous project's list, so the form is reset.
    pub fn change_project(&mut self) {
        self.reset_form();
    }

    /// A prompt was deleted; leave edit mode if it was the one being edited.
    pub fn forget(&mut self, prompt_id: i64) {
        if self.editing == Some(prompt_id) {
            self.reset_form();
        }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.loads.issue()
    }

    /// Install the result of load `ticket`. Returns `false` and leaves the
    /// panel alone if a newer load has started since.
    pub fn finish_load(&mut self, ticket: u64, panel: ListPanel<Prompt>) -> bool {
        if !self.loads.is_current(ticket) {
            return false;
        }
        self.panel = panel;
        true
    }
}

/// Load prompts for the selected project. No selection clears the panel
/// without a request.
pub async fn load_prompts<T: Transport>(api: &ApiClient<T>, session: &Session, project_id: &str) -> ListPanel<Prompt> {
    let Some(project_id) = parse_project_id(project_id) else {
        return ListPanel::Cleared;
    };
    ListPanel::from_result(api.list_prompts(session, project_id).await, "prompts")
}

/// Create a prompt. Returns `true` when the form should be reset and the
/// list reloaded.
pub async fn create_prompt<T: Transport, D: Dialogs>(
    api: &ApiClient<T>,
    session: &Session,
    dialogs: &D,
    project_id: &str,
    name: &str,
    content: &str,
) -> bool {
    let Some(project_id) = parse_project_id(project_id).filter(|_| !name.is_empty() && !content.is_empty()) else {
        dialogs.alert(FILL_ALL_FIELDS);
        return false;
    };
    match api.create_prompt(session, project_id, name, content).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("creating prompt failed: {e}");
            dialogs.alert(&e.message_or(CREATE_FAILED));
            false
        }
    }
}

/// Save edits to an existing prompt. Returns `true` on success.
pub async fn update_prompt<T: Transport, D: Dialogs>(
    api: &ApiClient<T>,
    session: &Session,
    dialogs: &D,
    prompt_id: i64,
    name: &str,
    content: &str,
) -> bool {
    if name.is_empty() || content.is_empty() {
        dialogs.alert(FILL_ALL_FIELDS);
        return false;
    }
    match api.update_prompt(session, prompt_id, name, content).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("updating prompt {prompt_id} failed: {e}");
            dialogs.alert(&e.message_or(UPDATE_FAILED));
            false
        }
    }
}

/// Delete a prompt after confirmation. Returns `true` when the list should
/// be reloaded.
pub async fn delete_prompt<T: Transport, D: Dialogs>(
    api: &ApiClient<T>,
    session: &Session,
    dialogs: &D,
    prompt_id: i64,
) -> bool {
    if !dialogs.confirm(CONFIRM_DELETE) {
        return false;
    }
    match api.delete_prompt(session, prompt_id).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("deleting prompt {prompt_id} failed: {e}");
            dialogs.alert(&e.message_or(DELETE_FAILED));
            false
        }
    }
}
