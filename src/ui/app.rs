// src/ui/app.rs - Application root

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{ApiClient, LANGUAGE_KEY};
use crate::config::AppConfig;
use crate::models::Session;
use crate::platform;
use crate::query::QueryCache;
use crate::session::restore_session;
use crate::ui::{router::Route, AppContext, Notification};

/// Wires up the shared context (session, language, toasts, query cache,
/// API client) and mounts the router. The persisted session is restored
/// once, before the first route renders, so a direct link to a protected
/// route survives a reload.
#[component]
pub fn App() -> Element {
    let session = use_signal(|| None::<Session>);
    let language = use_signal(String::new);
    let notifications = use_signal(Vec::<Notification>::new);

    QueryCache::provide();
    use_context_provider(|| AppContext {
        session,
        language,
        notifications,
    });

    use_context_provider(|| {
        let config = AppConfig::load();
        let providers = platform::create_providers();

        let mut session = session;
        session.set(restore_session(providers.storage.as_ref()));

        let stored_language = providers.storage.get(LANGUAGE_KEY).ok().flatten();
        let mut language = language;
        language.set(stored_language.unwrap_or_else(|| config.default_language.clone()));

        ApiClient::new(providers.http, providers.storage, config, session, language)
    });

    rsx! {
        Router::<Route> {}
    }
}
