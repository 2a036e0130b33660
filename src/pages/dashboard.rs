//! Dashboard page: project list and creation, prompt and file panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after login. The project list loads on entry and after every
//! create attempt; each create also bumps `projects_version` so the prompt
//! and file dropdowns pick up the new project.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::file_panel::FilePanel;
use crate::components::prompt_panel::PromptPanel;
use crate::net::api::ApiClient;
use crate::state::auth::sign_out;
use crate::state::projects::{ProjectsState, create_and_reload, load_projects};
use crate::state::session::Session;
use crate::util::storage::LocalTokenStore;
use crate::util::task::spawn;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<LocalTokenStore>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let projects = RwSignal::new(ProjectsState::default());
    let projects_version = RwSignal::new(0_u64);
    let project_name = RwSignal::new(String::new());

    {
        let api = api.clone();
        Effect::new(move || {
            let api = api.clone();
            let current = session.get_untracked();
            projects.update(|p| p.loading = true);
            spawn(async move {
                let result = load_projects(&api, &current).await;
                projects.update(|p| p.apply_list(result));
            });
        });
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let current = session.get_untracked();
        let name = project_name.get_untracked();
        projects.update(|p| p.loading = true);
        spawn(async move {
            let (create_error, reload) = create_and_reload(&api, &current, &name).await;
            projects.update(|p| p.apply_create(create_error, reload));
            projects_version.update(|v| *v += 1);
        });
    };

    let on_sign_out = move |_| {
        let mut current = session.get_untracked();
        let path = sign_out(&mut current, &store);
        session.set(current);
        navigate(path, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <A href="/chat">"Chat"</A>
                <button class="btn toolbar__logout" on:click=on_sign_out>
                    "Logout"
                </button>
            </header>

            <section class="panel project-panel">
                <h2>"Projects"</h2>
                <form class="panel__form" on:submit=on_create>
                    <input
                        id="projectName"
                        type="text"
                        placeholder="Project name"
                        prop:value=move || project_name.get()
                        on:input=move |ev| project_name.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || projects.get().loading>
                        "Create Project"
                    </button>
                </form>
                <Show when=move || projects.get().error.is_some()>
                    <p class="panel__error">{move || projects.get().error.unwrap_or_default()}</p>
                </Show>
                <ul id="projectList">
                    {move || {
                        projects
                            .get()
                            .items
                            .into_iter()
                            .map(|p| view! { <li>{p.name}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>

            <PromptPanel refresh=projects_version/>
            <FilePanel refresh=projects_version/>
        </div>
    }
}
