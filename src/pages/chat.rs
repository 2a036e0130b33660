//! Chat page: project dropdown, message box, reply area.
//!
//! A send that is superseded by a newer one is dropped on arrival; see
//! [`ChatState::finish`].

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::project_selector::ProjectSelector;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::chat::{ChatState, send_message, validate_chat_input};
use crate::state::projects::{CHAT_SELECTOR, SelectorState};
use crate::state::session::Session;
use crate::util::task::spawn;

#[component]
pub fn ChatPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();

    let selector = RwSignal::new(SelectorState::default());
    let chat = RwSignal::new(ChatState::default());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = chat.get_untracked().draft;
        let project_id = match validate_chat_input(&message, &selector.get_untracked().selected) {
            Ok(id) => id,
            Err(notice) => {
                chat.update(|c| c.reject(notice));
                return;
            }
        };

        let mut ticket = 0;
        chat.update(|c| ticket = c.begin());
        let api = api.clone();
        let current = session.get_untracked();
        let preview_chars = config.server_error_preview_chars;
        spawn(async move {
            let outcome = send_message(&api, &current, project_id, &message, preview_chars).await;
            chat.update(|c| {
                c.finish(ticket, outcome);
            });
        });
    };

    view! {
        <div class="chat-page">
            <header class="toolbar">
                <span class="toolbar__title">"Chat"</span>
                <span class="toolbar__spacer"></span>
                <A href="/dashboard">"Dashboard"</A>
            </header>

            <ProjectSelector spec=CHAT_SELECTOR state=selector/>

            <form class="chat-form" on:submit=on_send>
                <textarea
                    id="message"
                    placeholder="Ask something about this project"
                    prop:value=move || chat.get().draft
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit">
                    "Send"
                </button>
            </form>

            <p id="errorMsg" class="chat-page__error">{move || chat.get().error}</p>
            <div
                id="response"
                class="chat-page__response"
                class=("chat-page__response--pending", move || chat.get().in_flight())
            >
                {move || chat.get().response}
            </div>
        </div>
    }
}
