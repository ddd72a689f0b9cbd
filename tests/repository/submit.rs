//! Tests for submitting an application.

use nu_housing::model::application::{ApplicationDraft, ApplicationStatus};

use super::*;

fn scenario_draft() -> ApplicationDraft {
    ApplicationDraft::new(2025, "CS", "Other")
        .unwrap()
        .with_room_preference(Some("Single".to_string()))
}

fn scenario_body() -> serde_json::Value {
    json!({
        "year": 2025,
        "major": "CS",
        "gender": "Other",
        "room_preference": "Single",
        "additional_info": ""
    })
}

/// Tests the full submit-then-list flow of a student.
///
/// Expected: the backend's id is returned and the following listing shows the application
/// as pending
#[tokio::test]
async fn submitted_application_is_listed_as_pending() -> Result<(), TestError> {
    let mut listed = factory::mock_application(7, TEST_STUDENT_ID, "pending");
    listed["major"] = json!("CS");
    listed["room_preference"] = json!("Single");

    let test = TestBuilder::new()
        .with_submit_endpoint(scenario_body(), 200, json!({ "application_id": 7 }), 1)
        .with_my_applications_endpoint(vec![listed], 1)
        .build()
        .await?;
    let client = http_client(&test);
    let repo = ApplicationRepository::new(&client);

    let id = repo.submit(&scenario_draft()).await.unwrap();
    let mine = repo.list_mine().await.unwrap();

    assert_eq!(id, 7);
    let created = mine.iter().find(|app| app.id == id).unwrap();
    assert_eq!(created.major, "CS");
    assert_eq!(created.status, ApplicationStatus::Pending);
    assert_eq!(created.submitted_at, factory::test_submitted_at());
    test.assert_mocks();

    Ok(())
}

/// Tests a success status carrying an `{error}` body.
///
/// Expected: Err with ServerRejected holding the backend's message
#[tokio::test]
async fn error_body_is_rejection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submit_endpoint(
            scenario_body(),
            200,
            factory::mock_error("You already have an application"),
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client)
        .submit(&scenario_draft())
        .await;

    assert_eq!(
        result,
        Err(ApiError::ServerRejected {
            status: 200,
            message: "You already have an application".to_string()
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests a plain-text failure response.
///
/// Expected: Err with ServerRejected holding the raw body
#[tokio::test]
async fn raw_body_is_surfaced() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/applications/submit")
                .with_status(500)
                .with_body("Internal Server Error")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let client = http_client(&test);

    let err = ApplicationRepository::new(&client)
        .submit(&scenario_draft())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Internal Server Error");
    test.assert_mocks();

    Ok(())
}

/// Tests submitting without a session token.
///
/// Expected: Err with Unauthenticated and no request sent
#[tokio::test]
async fn refuses_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submit_endpoint(scenario_body(), 200, json!({ "application_id": 7 }), 0)
        .build()
        .await?;
    let client = anonymous_client(&test);

    let result = ApplicationRepository::new(&client)
        .submit(&scenario_draft())
        .await;

    assert_eq!(result, Err(ApiError::Unauthenticated));
    test.assert_mocks();

    Ok(())
}
