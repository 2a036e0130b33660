//! File management panel: project dropdown, upload form, file list.

use leptos::html;
use leptos::prelude::*;

use crate::components::project_selector::ProjectSelector;
use crate::net::api::ApiClient;
use crate::net::transport::FileUpload;
use crate::net::types::FileRecord;
use crate::state::files::{EMPTY_TEXT, FAILED_TEXT, FilesState, HEADING, delete_file, file_label, load_files, upload_file};
use crate::state::panel::ListPanel;
use crate::state::projects::{FILE_SELECTOR, SelectorState};
use crate::state::session::Session;
use crate::util::dialog::BrowserDialogs;
use crate::util::task::spawn;

/// The file currently chosen in `input`, if any.
fn chosen_file(input: NodeRef<html::Input>) -> Option<FileUpload> {
    #[cfg(feature = "csr")]
    {
        input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|files| files.get(0))
            .map(FileUpload::from_file)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        None
    }
}

fn clear_input(input: NodeRef<html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = input.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = input;
}

#[component]
pub fn FilePanel(#[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let selector = RwSignal::new(SelectorState::default());
    let files = RwSignal::new(FilesState::default());
    let file_input = NodeRef::<html::Input>::new();

    let reload = {
        let api = api.clone();
        Callback::new(move |project_id: String| {
            let api = api.clone();
            let current = session.get_untracked();
            let mut ticket = 0;
            files.update(|s| ticket = s.begin_load());
            spawn(async move {
                let panel = load_files(&api, &current, &project_id).await;
                files.update(|s| {
                    s.finish_load(ticket, panel);
                });
            });
        })
    };

    let on_upload = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if files.get_untracked().uploading {
                return;
            }
            let api = api.clone();
            let current = session.get_untracked();
            let project_id = selector.get_untracked().selected;
            let upload = chosen_file(file_input);
            files.update(|s| s.uploading = true);
            spawn(async move {
                let uploaded = upload_file(&api, &current, &BrowserDialogs, &project_id, upload).await;
                files.update(|s| s.uploading = false);
                if uploaded {
                    clear_input(file_input);
                    reload.run(project_id);
                }
            });
        }
    };

    let on_delete = Callback::new(move |file_id: i64| {
        let api = api.clone();
        let current = session.get_untracked();
        spawn(async move {
            if delete_file(&api, &current, &BrowserDialogs, file_id).await {
                reload.run(selector.get_untracked().selected);
            }
        });
    });

    view! {
        <section class="panel file-panel">
            <h2>"Files"</h2>
            <ProjectSelector spec=FILE_SELECTOR state=selector on_change=reload refresh=refresh/>
            <form class="panel__form" on:submit=on_upload>
                <input id="fileInput" type="file" node_ref=file_input/>
                <button class="btn" type="submit" disabled=move || files.get().uploading>
                    "Upload"
                </button>
            </form>
            <div id="filesList" class="panel__list">
                {move || {
                    let panel = files.get().panel;
                    let heading = panel.has_heading().then(|| view! { <h3>{HEADING}</h3> });
                    let body = match panel {
                        ListPanel::Cleared => ().into_any(),
                        ListPanel::Failed => view! { <p class="panel__error">{FAILED_TEXT}</p> }.into_any(),
                        ListPanel::Empty => view! { <p>{EMPTY_TEXT}</p> }.into_any(),
                        ListPanel::Items(items) => {
                            items.into_iter().map(|file| view! { <FileItem file=file on_delete=on_delete/> }).collect_view().into_any()
                        }
                    };
                    view! { {heading} {body} }
                }}
            </div>
        </section>
    }
}

#[component]
fn FileItem(file: FileRecord, on_delete: Callback<i64>) -> impl IntoView {
    let id = file.id;
    view! {
        <div class="panel__item">
            <span>{file_label(&file)}</span>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
