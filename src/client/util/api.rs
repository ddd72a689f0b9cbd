use nu_housing::{api::ApiClient, config::Config, session::Session};

#[cfg(feature = "web")]
pub type PortalTransport = nu_housing::api::ReqwasmTransport;

#[cfg(all(feature = "native", not(feature = "web")))]
pub type PortalTransport = nu_housing::api::ReqwestTransport;

pub type PortalClient = ApiClient<PortalTransport>;

/// Client for the housing API carrying the session's bearer token.
pub fn portal_client(config: &Config, session: &Session) -> PortalClient {
    ApiClient::new(
        PortalTransport::default(),
        config.api_url.clone(),
        Some(session.token.clone()),
    )
}
