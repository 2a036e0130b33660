//! Sign-in page with login and register panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. One panel is visible at a time and both share a single
//! status line. A successful login persists the token, updates the session
//! context and navigates to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_line::StatusLine;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::auth::{AuthPanel, AuthState, AuthStep, login, register};
use crate::state::session::Session;
use crate::util::storage::LocalTokenStore;
use crate::util::task::{sleep, spawn};

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    let store = expect_context::<LocalTokenStore>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let auth = RwSignal::new(AuthState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    let on_login = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if auth.get_untracked().busy {
                return;
            }
            auth.update(|a| a.busy = true);
            let api = api.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            spawn(async move {
                let mut next_session = session.get_untracked();
                let outcome = login(&api, &mut next_session, &store, &email_value, &password_value).await;
                auth.update(|a| a.apply(&outcome));
                if let AuthStep::Navigate(path) = outcome.next {
                    session.set(next_session);
                    navigate(path, NavigateOptions::default());
                }
            });
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        auth.update(|a| a.busy = true);
        let api = api.clone();
        let delay = config.register_redirect_delay;
        let email_value = reg_email.get_untracked();
        let password_value = reg_password.get_untracked();
        spawn(async move {
            let outcome = register(&api, &email_value, &password_value, delay).await;
            auth.update(|a| a.apply(&outcome));
            if let AuthStep::ShowLoginAfter(delay) = outcome.next {
                sleep(delay).await;
                auth.update(AuthState::show_login);
            }
        });
    };

    let display = move |panel: AuthPanel| if auth.get().panel == panel { "block" } else { "none" };

    view! {
        <div class="home-page">
            <div class="auth-card">
                <h1>"Chatdesk"</h1>
                <form
                    id="loginSection"
                    class="auth-form"
                    style:display=move || display(AuthPanel::Login)
                    on:submit=on_login
                >
                    <h2>"Login"</h2>
                    <input
                        id="email"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || auth.get().busy>
                        "Login"
                    </button>
                    <p>
                        "No account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            auth.update(AuthState::show_register);
                        }>"Register"</a>
                    </p>
                </form>
                <form
                    id="registerSection"
                    class="auth-form"
                    style:display=move || display(AuthPanel::Register)
                    on:submit=on_register
                >
                    <h2>"Register"</h2>
                    <input
                        id="regEmail"
                        type="email"
                        placeholder="Email"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        id="regPassword"
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || auth.get().busy>
                        "Register"
                    </button>
                    <p>
                        "Have an account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            auth.update(AuthState::show_login);
                        }>"Login"</a>
                    </p>
                </form>
                <div id="message">
                    <StatusLine message=Signal::derive(move || auth.get().message)/>
                </div>
            </div>
        </div>
    }
}
