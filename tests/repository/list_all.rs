//! Tests for the staff listing of every application.

use nu_housing::{model::application::ApplicationStatus, repository::StatusFilter};

use super::*;

fn staff_listing() -> Vec<serde_json::Value> {
    vec![
        factory::mock_staff_application(1, 20, "pending"),
        factory::mock_staff_application(2, 21, "approved"),
        factory::mock_staff_application(3, 22, "pending"),
        factory::mock_staff_application(4, 23, "rejected"),
    ]
}

/// Tests decoding of staff records.
///
/// Expected: Ok with applicant details and offset-less timestamps read as UTC
#[tokio::test]
async fn decodes_staff_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_housing_applications_endpoint(staff_listing(), 1)
        .build()
        .await?;
    let client = http_client(&test);

    let all = ApplicationRepository::new(&client)
        .list_all(StatusFilter::All)
        .await
        .unwrap();

    assert_eq!(all.len(), 4);
    assert_eq!(all[0].student_name.as_deref(), Some("Student 20"));
    assert_eq!(all[0].email.as_deref(), Some("student20@nu.edu"));
    assert_eq!(all[0].updated_at, None);
    assert_eq!(all[0].additional_info, None);
    assert_eq!(all[0].submitted_at, factory::test_submitted_at());
    test.assert_mocks();

    Ok(())
}

/// Tests narrowing the listing by status.
///
/// Expected: every filtered listing equals the matching partition of the full listing
#[tokio::test]
async fn filter_matches_partition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_housing_applications_endpoint(staff_listing(), 4)
        .build()
        .await?;
    let client = http_client(&test);
    let repo = ApplicationRepository::new(&client);

    let all = repo.list_all(StatusFilter::All).await.unwrap();

    for status in ApplicationStatus::ALL {
        let filtered = repo.list_all(StatusFilter::Only(status)).await.unwrap();
        let partition: Vec<_> = all.iter().filter(|app| app.status == status).collect();

        assert_eq!(filtered.len(), partition.len());
        assert!(filtered.iter().zip(partition).all(|(a, b)| a == b));
    }
    test.assert_mocks();

    Ok(())
}

/// Tests a non-staff session.
///
/// Expected: Err with Unauthorized
#[tokio::test]
async fn forbidden_for_other_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/housing/applications")
                .with_status(403)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let client = http_client(&test);

    let result = ApplicationRepository::new(&client)
        .list_all(StatusFilter::All)
        .await;

    assert_eq!(result, Err(ApiError::Unauthorized));
    test.assert_mocks();

    Ok(())
}
