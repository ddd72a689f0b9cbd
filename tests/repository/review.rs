//! Tests for approving and rejecting applications.

use super::*;

/// Tests approving a pending application.
///
/// Expected: Ok
#[tokio::test]
async fn approves_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_approve_endpoint(5, 200, json!({ "message": "Application approved" }), 1)
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client).approve(5).await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

/// Tests approving an application that was already approved.
///
/// Expected: Err with ServerRejected holding the backend's message
#[tokio::test]
async fn approving_twice_is_rejected_by_backend() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_approve_endpoint(
            42,
            400,
            factory::mock_error("Application is not pending"),
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client).approve(42).await;

    assert_eq!(
        result,
        Err(ApiError::ServerRejected {
            status: 400,
            message: "Application is not pending".to_string()
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests rejecting with a reason.
///
/// Expected: Ok with the trimmed reason sent as the JSON body
#[tokio::test]
async fn rejects_with_reason() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_reject_endpoint(5, "Missing documents", 200, json!({}), 1)
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client)
        .reject(5, " Missing documents  ")
        .await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

/// Tests rejecting without a reason.
///
/// Expected: Err with Validation and no request sent
#[tokio::test]
async fn blank_reason_is_not_sent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/housing/applications/5/reject")
                .expect(0)
                .create()
        })
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client).reject(5, "  ").await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    test.assert_mocks();

    Ok(())
}

/// Tests that the test builder refuses a reject endpoint without a reason.
///
/// Expected: Err with InvalidFixture
#[tokio::test]
async fn builder_requires_reason() {
    let result = TestBuilder::new()
        .with_reject_endpoint(5, "", 200, json!({}), 1)
        .build()
        .await;

    assert!(matches!(result, Err(TestError::InvalidFixture(_))));
}
