//! Prompt management panel: project dropdown, create/edit form, prompt list.

use leptos::prelude::*;

use crate::components::project_selector::ProjectSelector;
use crate::net::api::ApiClient;
use crate::net::types::Prompt;
use crate::state::panel::ListPanel;
use crate::state::projects::{PROMPT_SELECTOR, SelectorState};
use crate::state::prompts::{
    EMPTY_TEXT, FAILED_TEXT, HEADING, PromptsState, create_prompt, delete_prompt, load_prompts, update_prompt,
};
use crate::state::session::Session;
use crate::util::dialog::BrowserDialogs;
use crate::util::task::spawn;

#[component]
pub fn PromptPanel(#[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let selector = RwSignal::new(SelectorState::default());
    let prompts = RwSignal::new(PromptsState::default());

    let reload = {
        let api = api.clone();
        Callback::new(move |project_id: String| {
            let api = api.clone();
            let current = session.get_untracked();
            let mut ticket = 0;
            prompts.update(|s| ticket = s.begin_load());
            spawn(async move {
                let panel = load_prompts(&api, &current, &project_id).await;
                prompts.update(|s| {
                    s.finish_load(ticket, panel);
                });
            });
        })
    };
    let on_project_change = Callback::new(move |project_id: String| {
        prompts.update(PromptsState::change_project);
        reload.run(project_id);
    });

    let on_save = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let api = api.clone();
            let current = session.get_untracked();
            let project_id = selector.get_untracked().selected;
            let form = prompts.get_untracked();
            spawn(async move {
                let saved = match form.editing {
                    Some(prompt_id) => {
                        update_prompt(&api, &current, &BrowserDialogs, prompt_id, &form.name, &form.content).await
                    }
                    None => create_prompt(&api, &current, &BrowserDialogs, &project_id, &form.name, &form.content).await,
                };
                if saved {
                    prompts.update(PromptsState::reset_form);
                    reload.run(project_id);
                }
            });
        }
    };

    let on_delete = Callback::new(move |prompt_id: i64| {
        let api = api.clone();
        let current = session.get_untracked();
        spawn(async move {
            if delete_prompt(&api, &current, &BrowserDialogs, prompt_id).await {
                prompts.update(|s| s.forget(prompt_id));
                reload.run(selector.get_untracked().selected);
            }
        });
    });
    let on_edit = Callback::new(move |prompt: Prompt| prompts.update(|s| s.edit(&prompt)));

    view! {
        <section class="panel prompt-panel">
            <h2>"Prompts"</h2>
            <ProjectSelector spec=PROMPT_SELECTOR state=selector on_change=on_project_change refresh=refresh/>
            <form class="panel__form" on:submit=on_save>
                <input
                    id="promptName"
                    type="text"
                    placeholder="Prompt name"
                    prop:value=move || prompts.get().name
                    on:input=move |ev| prompts.update(|s| s.name = event_target_value(&ev))
                />
                <textarea
                    id="promptContent"
                    placeholder="Prompt content"
                    prop:value=move || prompts.get().content
                    on:input=move |ev| prompts.update(|s| s.content = event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit">
                    {move || if prompts.get().editing.is_some() { "Save Prompt" } else { "Create Prompt" }}
                </button>
                <Show when=move || prompts.get().editing.is_some()>
                    <button class="btn" type="button" on:click=move |_| prompts.update(PromptsState::reset_form)>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <div id="promptsList" class="panel__list">
                {move || {
                    let panel = prompts.get().panel;
                    let heading = panel.has_heading().then(|| view! { <h3>{HEADING}</h3> });
                    let body = match panel {
                        ListPanel::Cleared => ().into_any(),
                        ListPanel::Failed => view! { <p class="panel__error">{FAILED_TEXT}</p> }.into_any(),
                        ListPanel::Empty => view! { <p>{EMPTY_TEXT}</p> }.into_any(),
                        ListPanel::Items(items) => {
                            items
                                .into_iter()
                                .map(|prompt| view! { <PromptItem prompt=prompt on_edit=on_edit on_delete=on_delete/> })
                                .collect_view()
                                .into_any()
                        }
                    };
                    view! { {heading} {body} }
                }}
            </div>
        </section>
    }
}

#[component]
fn PromptItem(prompt: Prompt, on_edit: Callback<Prompt>, on_delete: Callback<i64>) -> impl IntoView {
    let id = prompt.id;
    let name = prompt.name.clone();
    let content = prompt.content.clone();
    view! {
        <div class="panel__item">
            <strong>{name}</strong>
            <p>{content}</p>
            <button class="btn" on:click=move |_| on_edit.run(prompt.clone())>
                "Edit"
            </button>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
