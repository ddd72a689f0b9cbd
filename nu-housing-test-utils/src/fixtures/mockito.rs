//! Housing API mock endpoint creation utilities.
//!
//! Every endpoint only matches requests carrying the test bearer token, so a request sent
//! without a session fails the mock's expectations instead of silently succeeding.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::test_bearer, fixtures::HousingFixtures};

impl<'a> HousingFixtures<'a> {
    /// Create a mock endpoint for `GET /applications/my`.
    ///
    /// # Arguments
    /// - `applications` - Records returned as a JSON array
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_my_applications_endpoint(
        &mut self,
        applications: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("GET", "/applications/my", 200, Value::Array(applications))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `POST /applications/submit`.
    ///
    /// # Arguments
    /// - `expected_body` - JSON body the request must carry
    /// - `status` - Status code to answer with
    /// - `response` - Body to answer with, e.g. `{"application_id": 7}` or `{"error": ...}`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_submit_endpoint(
        &mut self,
        expected_body: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("POST", "/applications/submit", status, response)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /housing/applications`.
    pub fn create_housing_applications_endpoint(
        &mut self,
        applications: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            "GET",
            "/housing/applications",
            200,
            Value::Array(applications),
        )
        .expect(expected_requests)
        .create()
    }

    /// Create a mock endpoint for `POST /housing/applications/{id}/approve`.
    ///
    /// # Arguments
    /// - `application_id` - Application ID for the endpoint path
    /// - `status` - Status code to answer with
    /// - `response` - Body to answer with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_approve_endpoint(
        &mut self,
        application_id: i64,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/housing/applications/{}/approve", application_id);

        self.json_endpoint("POST", &url, status, response)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `POST /housing/applications/{id}/reject`.
    ///
    /// The request body must be `{"reason": <reason>}`.
    pub fn create_reject_endpoint(
        &mut self,
        application_id: i64,
        reason: &str,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/housing/applications/{}/reject", application_id);

        self.json_endpoint("POST", &url, status, response)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "reason": reason })))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /admin/stats`.
    pub fn create_admin_stats_endpoint(&mut self, stats: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/admin/stats", 200, stats)
            .expect(expected_requests)
            .create()
    }

    fn json_endpoint(&mut self, method: &str, path: &str, status: usize, body: Value) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_header("authorization", test_bearer().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
    }
}
