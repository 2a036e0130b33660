//! Uploaded-file management for the selected project.
//!
//! Mirrors the prompt panel: blocking notices for failures, backend `detail`
//! surfaced on every failed mutation.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::api::ApiClient;
use crate::net::transport::{FileUpload, Transport};
use crate::net::types::FileRecord;
use crate::state::panel::{ListPanel, LoadTicket, parse_project_id};
use crate::state::session::Session;
use crate::util::dialog::Dialogs;
use crate::util::text::format_file_size;

pub const HEADING: &str = "Uploaded Files:";
pub const EMPTY_TEXT: &str = "No files uploaded yet.";
pub const FAILED_TEXT: &str = "Error loading files";
pub const SELECT_PROJECT: &str = "Please select a project";
pub const SELECT_FILE: &str = "Please select a file";
pub const UPLOAD_SUCCESS: &str = "File uploaded successfully";
pub const UPLOAD_FAILED: &str = "Error uploading file";
pub const CONFIRM_DELETE: &str = "Delete this file?";
pub const DELETE_FAILED: &str = "Error deleting file";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilesState {
    pub panel: ListPanel<FileRecord>,
    pub uploading: bool,
    loads: LoadTicket,
}

impl FilesState {
    pub fn begin_load(&mut self) -> u64 {
        self.loads.issue()
    }

    /// Install the result of load `ticket` unless a newer load has started.
    pub fn finish_load(&mut self, ticket: u64, panel: ListPanel<FileRecord>) -> bool {
        if !self.loads.is_current(ticket) {
            return false;
        }
        self.panel = panel;
        true
    }
}

/// `name (size)` line shown for one file.
pub fn file_label(file: &FileRecord) -> String {
    format!("{} ({})", file.filename, format_file_size(file.file_size))
}

/// Load files for the selected project. No selection clears the panel
/// without a request.
pub async fn load_files<T: Transport>(api: &ApiClient<T>, session: &Session, project_id: &str) -> ListPanel<FileRecord> {
    let Some(project_id) = parse_project_id(project_id) else {
        return ListPanel::Cleared;
    };
    ListPanel::from_result(api.list_files(session, project_id).await, "files")
}

/// Upload the chosen file. Returns `true` when the file input should be
/// cleared and the list reloaded.
pub async fn upload_file<T: Transport, D: Dialogs>(
    api: &ApiClient<T>,
    session: &Session,
    dialogs: &D,
    project_id: &str,
    upload: Option<FileUpload>,
) -> bool {
    let Some(project_id) = parse_project_id(project_id) else {
        dialogs.alert(SELECT_PROJECT);
        return false;
    };
    let Some(upload) = upload else {
        dialogs.alert(SELECT_FILE);
        return false;
    };

    let filename = upload.filename.clone();
    match api.upload_file(session, project_id, upload).await {
        Ok(()) => {
            leptos::logging::log!("uploaded {filename} to project {project_id}");
            dialogs.alert(UPLOAD_SUCCESS);
            true
        }
        Err(e) => {
            leptos::logging::warn!("uploading {filename} failed: {e}");
            dialogs.alert(&e.message_or(UPLOAD_FAILED));
            false
        }
    }
}

/// Delete a file after confirmation. Returns `true` when the list should be
/// reloaded.
pub async fn delete_file<T: Transport, D: Dialogs>(
    api: &ApiClient<T>,
    session: &Session,
    dialogs: &D,
    file_id: i64,
) -> bool {
    if !dialogs.confirm(CONFIRM_DELETE) {
        return false;
    }
    match api.delete_file(session, file_id).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("deleting file {file_id} failed: {e}");
            dialogs.alert(&e.message_or(DELETE_FAILED));
            false
        }
    }
}
