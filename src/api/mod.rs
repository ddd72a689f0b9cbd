//! HTTP access to the housing API.
//!
//! [`ApiClient`] owns the base URL and the session's bearer token and turns raw
//! [`transport`] responses into decoded values or [`ApiError`]s. The transport is pluggable:
//! browsers use the fetch-based `ReqwasmTransport`, native builds the reqwest-based
//! `ReqwestTransport`.

pub mod transport;

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "web")]
pub mod web;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::transport::{ApiRequest, ApiResponse, Method, Transport},
    error::ApiError,
    model::api::ErrorDto,
};

#[cfg(feature = "native")]
pub use native::ReqwestTransport;
#[cfg(feature = "web")]
pub use web::ReqwasmTransport;

/// Authenticated client for the housing API.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client for `base_url` using the session's token, if any.
    ///
    /// A blank token is treated as no token; every request made without one fails with
    /// `ApiError::Unauthenticated` before reaching the transport.
    pub fn new(transport: T, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET` a JSON resource.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(Method::Get, path, None).await?;
        decode(path, &response)
    }

    /// `POST` a JSON body and return the successful response.
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Transport(format!("Failed to encode request body: {}", e)))?;

        self.execute(Method::Post, path, Some(body)).await
    }

    /// `POST` without a body and return the successful response.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.execute(Method::Post, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let Some(bearer) = self.token.clone() else {
            tracing::debug!("Refusing {} {} without a session token", method, path);
            return Err(ApiError::Unauthenticated);
        };

        tracing::debug!("Sending {} {}", method, path);

        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: format!("{}{}", self.base_url, path),
                bearer,
                body,
            })
            .await
            .map_err(|e| {
                tracing::error!("{} {} failed: {}", method, path, e);
                ApiError::from(e)
            })?;

        if response.is_success() {
            return Ok(response);
        }

        let err = rejection(&response);
        tracing::warn!(status = response.status, "{} {} rejected: {}", method, path, err);

        Err(err)
    }
}

/// Decode a successful JSON response body.
pub(crate) fn decode<R: DeserializeOwned>(path: &str, response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::error!("Failed to parse response of {}: {}", path, e);
        ApiError::Transport(format!("Failed to parse response of {}: {}", path, e))
    })
}

/// Map a non-success response to an error.
///
/// 401 and 403 become session errors; anything else keeps the backend's message, taken from
/// an `{error}` body when present and from the raw body otherwise.
fn rejection(response: &ApiResponse) -> ApiError {
    match response.status {
        401 => ApiError::Unauthenticated,
        403 => ApiError::Unauthorized,
        status => {
            let message = if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(&response.body) {
                error_dto.error
            } else if !response.body.trim().is_empty() {
                response.body.trim().to_string()
            } else {
                format!("Request failed with status {}", status)
            };

            ApiError::ServerRejected { status, message }
        }
    }
}
