use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;
use nu_housing::{
    config::Config,
    error::ApiError,
    model::user::Role,
    session::{Session, StoredSession, TOKEN_KEY, USER_KEY},
};

use crate::client::app::SessionState;

/// Read the `{token, user}` pair written by the authentication service.
///
/// Failing to read local storage is treated like an empty session.
pub async fn read_stored_session() -> StoredSession {
    let script = format!(
        "return [localStorage.getItem({:?}), localStorage.getItem({:?})];",
        TOKEN_KEY, USER_KEY
    );

    match document::eval(&script)
        .join::<(Option<String>, Option<String>)>()
        .await
    {
        Ok((token, user)) => StoredSession::new(token, user),
        Err(e) => {
            tracing::warn!("Failed to read stored session: {:?}", e);
            StoredSession::default()
        }
    }
}

/// Resolve the session for a dashboard that requires `required`.
///
/// Returns the session once it is authorized. Otherwise navigates to the login entry point or
/// the user's own dashboard and returns `None`, so the caller never starts a fetch.
pub fn use_session_gate(required: Role) -> Option<Session> {
    let state = use_context::<Signal<SessionState>>();
    let config = use_context::<Config>();
    let navigator = use_navigator();

    let resolution = use_memo(move || {
        let state = state.read();
        state.fetched.then(|| state.stored.authorize(required))
    });

    use_effect(move || {
        let resolution = resolution.read();
        let Some(path) = resolution
            .as_ref()
            .and_then(|r| r.redirect_path(&config.login_path))
        else {
            return;
        };

        tracing::info!("Redirecting to {}", path);
        navigator.replace(path);
    });

    let resolution = resolution.read();
    resolution.as_ref().and_then(|r| r.session().cloned())
}

/// Leave a dashboard whose session the backend no longer accepts.
pub fn redirect_if_signed_out(err: &ApiError, config: &Config, navigator: Navigator) {
    if *err == ApiError::Unauthenticated {
        tracing::warn!("Session rejected by the housing API");
        navigator.replace(config.login_path.clone());
    }
}
