//! Project dropdown shared by the chat, prompt and file screens.
//!
//! Loads on mount and again whenever `refresh` changes. A change of the
//! selected value, by the user or by a reload, is reported through
//! `on_change`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::projects::{SelectorOutcome, SelectorSpec, SelectorState, populate_project_selector};
use crate::state::session::Session;
use crate::util::task::spawn;

#[component]
pub fn ProjectSelector(
    spec: SelectorSpec,
    state: RwSignal<SelectorState>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] refresh: Option<Signal<u64>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(refresh) = refresh {
            refresh.track();
        }
        let api = api.clone();
        let navigate = navigate.clone();
        let current = session.get_untracked();
        spawn(async move {
            match populate_project_selector(&api, &current, &spec).await {
                SelectorOutcome::Options(options) => {
                    let mut changed = false;
                    state.update(|s| changed = s.set_options(options));
                    if changed {
                        if let Some(on_change) = on_change {
                            on_change.run(state.get_untracked().selected);
                        }
                    }
                }
                SelectorOutcome::Redirect(path) => navigate(path, NavigateOptions::default()),
                SelectorOutcome::Unchanged => {}
            }
        });
    });

    let on_select = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.selected.clone_from(&value));
        if let Some(on_change) = on_change {
            on_change.run(value);
        }
    };

    view! {
        <select id=spec.element_id class="project-select" on:change=on_select>
            {move || {
                let current = state.get();
                current
                    .options
                    .into_iter()
                    .map(|option| {
                        let selected = option.value == current.selected;
                        view! {
                            <option value=option.value selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
