use dioxus::prelude::*;
use nu_housing::{config::Config, session::StoredSession};

use crate::client::{router::Route, util::session::read_stored_session};

/// Session values read from local storage once per page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub stored: StoredSession,
    /// Whether local storage has been read yet.
    pub fetched: bool,
}

#[component]
pub fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(client_config);

    use_future(move || async move {
        let stored = read_stored_session().await;
        session.set(SessionState {
            stored,
            fetched: true,
        });
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(not(feature = "native"))]
fn client_config() -> Config {
    Config::compiled()
}

// Native builds can read the environment at runtime.
#[cfg(feature = "native")]
fn client_config() -> Config {
    use dioxus_logger::tracing;

    Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Falling back to build-time configuration: {}", e);
        Config::compiled()
    })
}
