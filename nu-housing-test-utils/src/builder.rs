//! Declarative builder for a mock housing API.
//!
//! Endpoints are queued while chaining and registered on a fresh mockito server by
//! [`TestBuilder::build`].

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for a [`TestSetup`] with pre-configured endpoints.
#[derive(Default)]
pub struct TestBuilder {
    // Custom endpoints, created first
    mock_builders: Vec<MockBuilder>,

    // Pre-configured endpoint shortcuts
    my_applications_endpoints: Vec<(Vec<Value>, usize)>,
    submit_endpoints: Vec<(Value, usize, Value, usize)>, // (expected body, status, response, expected)
    housing_applications_endpoints: Vec<(Vec<Value>, usize)>,
    approve_endpoints: Vec<(i64, usize, Value, usize)>, // (id, status, response, expected)
    reject_endpoints: Vec<(i64, String, usize, Value, usize)>, // (id, reason, status, response, expected)
    admin_stats_endpoints: Vec<(Value, usize)>,
}

impl TestBuilder {
    /// Create a builder with no endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `applications` from `GET /applications/my`.
    pub fn with_my_applications_endpoint(
        mut self,
        applications: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.my_applications_endpoints
            .push((applications, expected_requests));
        self
    }

    /// Answer `POST /applications/submit` carrying `expected_body` with `response`.
    pub fn with_submit_endpoint(
        mut self,
        expected_body: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.submit_endpoints
            .push((expected_body, status, response, expected_requests));
        self
    }

    /// Serve `applications` from `GET /housing/applications`.
    pub fn with_housing_applications_endpoint(
        mut self,
        applications: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.housing_applications_endpoints
            .push((applications, expected_requests));
        self
    }

    /// Answer `POST /housing/applications/{id}/approve` with `status` and `response`.
    pub fn with_approve_endpoint(
        mut self,
        application_id: i64,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.approve_endpoints
            .push((application_id, status, response, expected_requests));
        self
    }

    /// Answer `POST /housing/applications/{id}/reject` carrying `reason`.
    pub fn with_reject_endpoint(
        mut self,
        application_id: i64,
        reason: impl Into<String>,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.reject_endpoints.push((
            application_id,
            reason.into(),
            status,
            response,
            expected_requests,
        ));
        self
    }

    /// Serve `stats` from `GET /admin/stats`.
    pub fn with_admin_stats_endpoint(mut self, stats: Value, expected_requests: usize) -> Self {
        self.admin_stats_endpoints.push((stats, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nu_housing_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), nu_housing_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("GET", "/applications/my")
    ///             .with_status(500)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - server with all endpoints registered
    /// - `Err(TestError::InvalidFixture)` - a queued endpoint cannot be served
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await;
        let mut mocks = Vec::new();

        // Custom endpoints go first so mockito matches them before the shortcuts
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (applications, expected) in self.my_applications_endpoints {
            mocks.push(
                setup
                    .housing()
                    .create_my_applications_endpoint(applications, expected),
            );
        }

        for (body, status, response, expected) in self.submit_endpoints {
            mocks.push(
                setup
                    .housing()
                    .create_submit_endpoint(body, status, response, expected),
            );
        }

        for (applications, expected) in self.housing_applications_endpoints {
            mocks.push(
                setup
                    .housing()
                    .create_housing_applications_endpoint(applications, expected),
            );
        }

        for (id, status, response, expected) in self.approve_endpoints {
            mocks.push(
                setup
                    .housing()
                    .create_approve_endpoint(id, status, response, expected),
            );
        }

        for (id, reason, status, response, expected) in self.reject_endpoints {
            if reason.trim().is_empty() {
                return Err(TestError::InvalidFixture(format!(
                    "reject endpoint for application {} needs a reason",
                    id
                )));
            }

            mocks.push(
                setup
                    .housing()
                    .create_reject_endpoint(id, &reason, status, response, expected),
            );
        }

        for (stats, expected) in self.admin_stats_endpoints {
            mocks.push(setup.housing().create_admin_stats_endpoint(stats, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}
