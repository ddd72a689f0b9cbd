use nu_housing::api::{ApiClient, ReqwestTransport};
use nu_housing_test_utils::{constant::TEST_TOKEN, TestSetup};

/// Client for the mock housing API holding the test token.
pub fn http_client(test: &TestSetup) -> ApiClient<ReqwestTransport> {
    ApiClient::new(
        ReqwestTransport::default(),
        test.url(),
        Some(TEST_TOKEN.to_string()),
    )
}

/// Client for the mock housing API without a session.
pub fn anonymous_client(test: &TestSetup) -> ApiClient<ReqwestTransport> {
    ApiClient::new(ReqwestTransport::default(), test.url(), None)
}
