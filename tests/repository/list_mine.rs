//! Tests for listing the student's own applications.

use nu_housing::model::application::ApplicationStatus;

use super::*;

/// Tests that backend order is kept and empty optionals are read as absent.
///
/// Expected: Ok with both records in backend order
#[tokio::test]
async fn keeps_backend_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_my_applications_endpoint(
            vec![
                factory::mock_application(9, TEST_STUDENT_ID, "rejected"),
                factory::mock_application(4, TEST_STUDENT_ID, "pending"),
            ],
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);

    let mine = ApplicationRepository::new(&client).list_mine().await.unwrap();

    assert_eq!(mine.iter().map(|app| app.id).collect::<Vec<_>>(), vec![9, 4]);
    assert_eq!(mine[0].status, ApplicationStatus::Rejected);
    assert_eq!(mine[1].room_preference, None);
    test.assert_mocks();

    Ok(())
}

/// Tests a student without applications.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_listing_is_valid() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_my_applications_endpoint(Vec::new(), 1)
        .build()
        .await?;
    let client = http_client(&test);

    let mine = ApplicationRepository::new(&client).list_mine().await.unwrap();

    assert!(mine.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests an expired session.
///
/// Expected: Err with Unauthenticated
#[tokio::test]
async fn expired_session_is_unauthenticated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/applications/my")
                .with_status(401)
                .with_body(r#"{"error":"Token expired"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client).list_mine().await;

    assert_eq!(result, Err(ApiError::Unauthenticated));
    test.assert_mocks();

    Ok(())
}

/// Tests a record with a status the portal does not know.
///
/// Expected: Err with Transport
#[tokio::test]
async fn unknown_status_is_decode_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_my_applications_endpoint(
            vec![factory::mock_application(1, TEST_STUDENT_ID, "withdrawn")],
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client).list_mine().await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
    test.assert_mocks();

    Ok(())
}
