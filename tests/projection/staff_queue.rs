//! Tests for the staff queue over HTTP.

use nu_housing::workflow::ReviewAction;
use nu_housing_test_utils::constant::test_bearer;

use super::*;

/// Tests that an approval is followed by a refetch of the queue.
///
/// The first listing shows application 1 pending, the listing after the approval shows it
/// approved.
///
/// Expected: Ok, the queue shows the refetched state and no actions for application 1
#[tokio::test]
async fn approval_refetches_queue() -> Result<(), TestError> {
    let before = serde_json::to_string(&vec![
        factory::mock_staff_application(1, 20, "pending"),
        factory::mock_staff_application(2, 21, "rejected"),
    ])?;

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/housing/applications")
                .match_header("authorization", test_bearer().as_str())
                .with_status(200)
                .with_body(before)
                .expect(1)
                .create()
        })
        .with_approve_endpoint(1, 200, serde_json::json!({}), 1)
        .with_housing_applications_endpoint(
            vec![
                factory::mock_staff_application(1, 20, "approved"),
                factory::mock_staff_application(2, 21, "rejected"),
            ],
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);
    let repo = ApplicationRepository::new(&client);
    let mut queue = StaffQueue::new(Role::Housing);

    queue.load(&repo).await;
    assert_eq!(queue.counts().pending, 1);
    assert!(!queue.rows()[0].is_reviewed());

    let result = queue.review(&repo, 1, &ReviewAction::Approve).await;

    assert_eq!(result, Some(Ok(())));
    assert_eq!(queue.counts().pending, 0);
    assert_eq!(queue.counts().approved, 1);
    assert!(queue.rows().iter().all(|row| row.is_reviewed()));
    test.assert_mocks();

    Ok(())
}

/// Tests that switching the filter works on the fetched copy.
///
/// Expected: one listing request, rows narrowed per filter, counts unchanged
#[tokio::test]
async fn filter_changes_do_not_refetch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_housing_applications_endpoint(
            vec![
                factory::mock_staff_application(1, 20, "pending"),
                factory::mock_staff_application(2, 21, "approved"),
                factory::mock_staff_application(3, 22, "approved"),
            ],
            1,
        )
        .build()
        .await?;
    let client = http_client(&test);
    let repo = ApplicationRepository::new(&client);
    let mut queue = StaffQueue::new(Role::Housing);

    queue.load(&repo).await;

    for filter in StatusFilter::OPTIONS {
        queue.set_filter(filter);

        let expected = match filter {
            StatusFilter::All => 3,
            StatusFilter::Only(status) => queue.counts().count(status),
        };
        assert_eq!(queue.rows().len(), expected);
    }
    assert_eq!(queue.counts().count(ApplicationStatus::Approved), 2);
    test.assert_mocks();

    Ok(())
}
