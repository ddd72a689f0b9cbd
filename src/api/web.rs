//! Browser transport built on the fetch API.

use reqwasm::http::Request;

use crate::api::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .header("Authorization", &format!("Bearer {}", request.bearer));

        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
