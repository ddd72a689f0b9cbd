//! Tests for the admin statistics endpoint.

use std::time::Duration;

use nu_housing::{
    api::{ApiClient, ReqwestTransport},
    model::stats::AdminStatsDto,
};

use super::*;

/// Tests reading aggregate counts.
///
/// Expected: Ok with the backend's counts
#[tokio::test]
async fn returns_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin_stats_endpoint(factory::mock_admin_stats(120, 45, 30), 1)
        .build()
        .await?;
    let client = http_client(&test);

    let stats = ApplicationRepository::new(&client).admin_stats().await.unwrap();

    assert_eq!(
        stats,
        AdminStatsDto {
            users: 120,
            applications: 45,
            approved: 30
        }
    );
    test.assert_mocks();

    Ok(())
}

/// Tests an unreachable housing API.
///
/// Expected: Err with a retryable Transport error
#[tokio::test]
async fn unreachable_api_is_transport_error() -> Result<(), TestError> {
    let transport = ReqwestTransport::with_timeout(Duration::from_secs(5)).unwrap();
    let client = ApiClient::new(
        transport,
        "http://127.0.0.1:9",
        Some(TEST_TOKEN.to_string()),
    );

    let err = ApplicationRepository::new(&client)
        .admin_stats()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.is_retryable());

    Ok(())
}
