//! Project list, project creation, and the shared project selector.
//!
//! DESIGN
//! ======
//! The chat, prompt and file screens each show a project dropdown. One
//! loader, [`populate_project_selector`], serves all three; what differs per
//! screen (leading placeholder, empty/failure options, 401 handling) is
//! spelled out in its [`SelectorSpec`].

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::Project;
use crate::state::auth::HOME_PATH;
use crate::state::session::Session;

pub const CREATE_PROJECT_FAILED: &str = "Error creating project";
pub const LOAD_PROJECTS_FAILED: &str = "Error loading projects";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub error: Option<String>,
    pub loading: bool,
}

impl ProjectsState {
    /// Replace the list with a fresh load result.
    ///
    /// A failed reload keeps the previous entries and records the error.
    pub fn apply_list(&mut self, result: Result<Vec<Project>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("loading projects failed: {e}");
                self.error = Some(e.message_or(LOAD_PROJECTS_FAILED));
            }
        }
    }

    /// Apply the outcome of [`create_and_reload`]. A create error outlives
    /// a successful reload so the user still sees why nothing was added.
    pub fn apply_create(&mut self, create_error: Option<String>, reload: Result<Vec<Project>, ApiError>) {
        self.apply_list(reload);
        if create_error.is_some() {
            self.error = create_error;
        }
    }
}

pub async fn load_projects<T: Transport>(api: &ApiClient<T>, session: &Session) -> Result<Vec<Project>, ApiError> {
    api.list_projects(session).await
}

/// Create a project. The name is sent as typed, without local checks.
///
/// Returns the error line to show, if any. Callers reload the list whatever
/// the outcome.
pub async fn create_project<T: Transport>(api: &ApiClient<T>, session: &Session, name: &str) -> Option<String> {
    match api.create_project(session, name).await {
        Ok(()) => None,
        Err(e) => {
            leptos::logging::warn!("creating project failed: {e}");
            Some(e.message_or(CREATE_PROJECT_FAILED))
        }
    }
}

/// Create a project, then reload the list whatever the create outcome.
///
/// Returns the create error line, if any, and the reload result.
pub async fn create_and_reload<T: Transport>(
    api: &ApiClient<T>,
    session: &Session,
    name: &str,
) -> (Option<String>, Result<Vec<Project>, ApiError>) {
    let create_error = create_project(api, session, name).await;
    (create_error, load_projects(api, session).await)
}

// =============================================================
// Project selector
// =============================================================

/// One `<option>` in a project dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn blank(label: &str) -> Self {
        Self { value: String::new(), label: label.to_owned() }
    }
}

impl From<&Project> for SelectOption {
    fn from(project: &Project) -> Self {
        Self { value: project.id.to_string(), label: project.name.clone() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Any non-OK listing sends the user back to the sign-in page.
    RedirectHome,
    /// Non-OK listings are logged and the options left as they were.
    KeepOptions,
}

/// Per-screen parameters of the project dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorSpec {
    /// DOM id of the rendered `<select>`.
    pub element_id: &'static str,
    /// Blank option always listed first.
    pub placeholder: Option<&'static str>,
    /// Sole option when the user has no projects.
    pub empty_label: Option<&'static str>,
    /// Sole option when loading fails and no redirect applies.
    pub failure_label: Option<&'static str>,
    pub on_unauthorized: UnauthorizedPolicy,
}

pub const CHAT_SELECTOR: SelectorSpec = SelectorSpec {
    element_id: "projectSelect",
    placeholder: None,
    empty_label: Some("No projects. Create one first."),
    failure_label: Some(LOAD_PROJECTS_FAILED),
    on_unauthorized: UnauthorizedPolicy::RedirectHome,
};

pub const PROMPT_SELECTOR: SelectorSpec = SelectorSpec {
    element_id: "promptProjectSelect",
    placeholder: Some("Select a project"),
    empty_label: None,
    failure_label: None,
    on_unauthorized: UnauthorizedPolicy::KeepOptions,
};

pub const FILE_SELECTOR: SelectorSpec = SelectorSpec {
    element_id: "fileProjectSelect",
    placeholder: Some("Select a project"),
    empty_label: None,
    failure_label: None,
    on_unauthorized: UnauthorizedPolicy::KeepOptions,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorOutcome {
    Options(Vec<SelectOption>),
    Redirect(&'static str),
    Unchanged,
}

/// Options and current choice of one dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub options: Vec<SelectOption>,
    pub selected: String,
}

impl SelectorState {
    /// Install new options. The current choice survives if still offered,
    /// otherwise the first option is selected, as a browser would.
    ///
    /// Returns whether the selected value changed.
    pub fn set_options(&mut self, options: Vec<SelectOption>) -> bool {
        let previous = std::mem::take(&mut self.selected);
        self.selected = if options.iter().any(|o| o.value == previous) {
            previous.clone()
        } else {
            options.first().map(|o| o.value.clone()).unwrap_or_default()
        };
        self.options = options;
        self.selected != previous
    }
}

/// Load projects into the dropdown described by `spec`.
pub async fn populate_project_selector<T: Transport>(
    api: &ApiClient<T>,
    session: &Session,
    spec: &SelectorSpec,
) -> SelectorOutcome {
    match api.list_projects(session).await {
        Ok(projects) => SelectorOutcome::Options(selector_options(spec, &projects)),
        Err(e) => match (e.status(), spec.on_unauthorized) {
            (Some(status), UnauthorizedPolicy::RedirectHome) => {
                leptos::logging::warn!("{}: project listing rejected ({status}), leaving page", spec.element_id);
                SelectorOutcome::Redirect(HOME_PATH)
            }
            _ => {
                leptos::logging::warn!("{}: loading projects failed: {e}", spec.element_id);
                match spec.failure_label {
                    Some(label) => SelectorOutcome::Options(vec![SelectOption::blank(label)]),
                    None => SelectorOutcome::Unchanged,
                }
            }
        },
    }
}

/// Build the option list for a successful listing.
pub fn selector_options(spec: &SelectorSpec, projects: &[Project]) -> Vec<SelectOption> {
    if projects.is_empty() {
        if let Some(label) = spec.empty_label {
            return vec![SelectOption::blank(label)];
        }
    }
    spec.placeholder
        .map(SelectOption::blank)
        .into_iter()
        .chain(projects.iter().map(SelectOption::from))
        .collect()
}
