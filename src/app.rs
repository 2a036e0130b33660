//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::HttpTransport;
use crate::pages::{chat::ChatPage, dashboard::DashboardPage, home::HomePage};
use crate::state::session::Session;
use crate::util::storage::LocalTokenStore;

/// Root application component.
///
/// Provides the config, the API client, the token store and the session,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = LocalTokenStore::new(config.token_key.clone());
    let session = RwSignal::new(Session::restore(&store));
    let api = ApiClient::new(config.api_base.clone(), HttpTransport);
    leptos::logging::log!("app start: signed_in={}", session.get_untracked().is_signed_in());

    provide_context(config);
    provide_context(store);
    provide_context(api);
    provide_context(session);

    view! {
        <Title text="Chatdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
