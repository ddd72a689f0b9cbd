//! Error types for the housing portal.
//!
//! Every repository operation returns an [`ApiError`] instead of panicking, and the view layer
//! is the only place that turns one into user-facing text (see [`ApiError::user_message`]).
//! Input problems caught before a request is sent are [`ValidationError`]s, configuration
//! problems are [`ConfigError`]s.

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::api::transport::TransportError;

pub use config::ConfigError;
pub use validation::ValidationError;

/// Failure of a portal operation against the housing API.
///
/// # Error Categories
/// - `Unauthenticated` / `Unauthorized` - session problems, the view redirects
/// - `Transport` - network or decode failure, the view offers a retry
/// - `Validation` - bad input caught locally, no request was sent
/// - `ServerRejected` - the backend refused the request, its message is shown verbatim
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No usable session token, or the backend answered 401.
    #[error("No active session")]
    Unauthenticated,
    /// The session's role may not use this resource, or the backend answered 403.
    #[error("Session role is not permitted to access this resource")]
    Unauthorized,
    /// The request never produced a usable response.
    #[error("Transport failure: {0}")]
    Transport(String),
    /// Input rejected locally before any request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend answered with a non-success status or an `{error}` body.
    #[error("Request rejected with status {status}: {message}")]
    ServerRejected {
        /// HTTP status returned by the backend.
        status: u16,
        /// Message taken from the response body.
        message: String,
    },
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.to_string())
    }
}

impl ApiError {
    /// Text shown to the user for this error.
    ///
    /// Backend messages are surfaced unchanged; everything else gets a fixed message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => "Please log in first".to_string(),
            Self::Unauthorized => "You do not have access to this page".to_string(),
            Self::Transport(_) => "Failed to reach the housing service. Please try again.".to_string(),
            Self::Validation(err) => err.to_string(),
            Self::ServerRejected { message, .. } => message.clone(),
        }
    }

    /// Whether re-clicking the same action could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
