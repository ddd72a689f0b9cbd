//! Session context.
//!
//! The authentication service persists `{token, user}` in the browser's local storage; the
//! portal only reads it. Resolving a session never touches the network and never fails:
//! anything missing or malformed simply means the visitor is unauthenticated.
//!
//! The stored role decides which dashboard is rendered and nothing more. It can be edited by
//! whoever controls the browser, so it is never trusted to authorize data access; the housing
//! API checks the bearer token's role on every request.

use dioxus_logger::tracing;

use crate::model::user::{Role, UserDto};

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the JSON-encoded [`UserDto`].
pub const USER_KEY: &str = "user";

/// Raw values read from local storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<String>,
}

impl StoredSession {
    pub fn new(token: Option<String>, user: Option<String>) -> Self {
        Self { token, user }
    }

    /// Parses the stored values into a session.
    ///
    /// # Returns
    /// - `Some(Session)` - a non-blank token and a well-formed user record are stored
    /// - `None` - either value is missing, the token is blank, or the user record is malformed
    pub fn resolve(&self) -> Option<Session> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let user = self.user.as_deref()?;

        match serde_json::from_str::<UserDto>(user) {
            Ok(user) => Some(Session {
                token: token.to_string(),
                user,
            }),
            Err(err) => {
                tracing::warn!("Ignoring malformed stored user record: {}", err);
                None
            }
        }
    }

    /// Decides whether this session may enter the dashboard reserved for `required`.
    pub fn authorize(&self, required: Role) -> SessionResolution {
        match self.resolve() {
            None => SessionResolution::Unauthenticated,
            Some(session) if session.role() == required => SessionResolution::Authorized(session),
            Some(session) => {
                tracing::debug!(
                    "Role {} may not enter the {} dashboard, redirecting",
                    session.role(),
                    required
                );
                SessionResolution::Redirect(session.role())
            }
        }
    }
}

/// A resolved, signed-in session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserDto,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Outcome of entering a role-gated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResolution {
    /// The session may render the view.
    Authorized(Session),
    /// No usable session; go to the login entry point.
    Unauthenticated,
    /// Signed in with another role; go to that role's own dashboard.
    Redirect(Role),
}

impl SessionResolution {
    /// Where the caller must navigate instead of rendering, if anywhere.
    pub fn redirect_path(&self, login_path: &str) -> Option<String> {
        match self {
            Self::Authorized(_) => None,
            Self::Unauthenticated => Some(login_path.to_string()),
            Self::Redirect(role) => Some(role.dashboard_path().to_string()),
        }
    }

    /// Session a view may load with; `None` for every redirect, so nothing under it fetches.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authorized(session) => Some(session),
            _ => None,
        }
    }
}
