//! One-line feedback text under a form.

use leptos::prelude::*;

use crate::state::auth::{StatusMessage, Tone};

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "status-line",
        Tone::Success => "status-line status-line--success",
        Tone::Error => "status-line status-line--error",
    }
}

/// Renders nothing when `message` is `None`.
#[component]
pub fn StatusLine(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! { <p class=tone_class(m.tone)>{m.text}</p> }
        })
    }
}
