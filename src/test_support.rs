//! In-memory housing API for unit tests.
//!
//! [`FakeBackend`] implements [`Transport`] and keeps a log of every request it received, so
//! tests can assert that an operation did or did not reach the network.

use std::cell::{Cell, RefCell};

use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::{
    api::{
        transport::{ApiRequest, ApiResponse, Method, Transport, TransportError},
        ApiClient,
    },
    model::{
        api::{RejectApplicationDto, SubmitApplicationDto},
        application::{ApplicationDto, ApplicationId, ApplicationStatus},
    },
};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_API_URL: &str = "http://housing.test";
pub const TEST_STUDENT_ID: i64 = 3;
pub const TEST_USER_COUNT: u64 = 12;

/// Application record with fixed timestamps.
pub fn application(id: ApplicationId, student_id: i64, status: ApplicationStatus) -> ApplicationDto {
    let submitted_at = Utc.with_ymd_and_hms(2025, 3, 5, 10, 30, 0).unwrap();

    ApplicationDto {
        id,
        student_id,
        year: 2,
        major: "Biology".to_string(),
        gender: "Female".to_string(),
        room_preference: None,
        additional_info: None,
        status,
        submitted_at,
        updated_at: Some(submitted_at),
        student_name: None,
        email: None,
    }
}

/// Stateful stand-in for the housing API.
pub struct FakeBackend {
    applications: RefCell<Vec<ApplicationDto>>,
    requests: RefCell<Vec<ApiRequest>>,
    next_id: Cell<ApplicationId>,
    offline: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::with_applications(Vec::new())
    }

    pub fn with_applications(applications: Vec<ApplicationDto>) -> Self {
        let next_id = applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        Self {
            applications: RefCell::new(applications),
            requests: RefCell::new(Vec::new()),
            next_id: Cell::new(next_id),
            offline: Cell::new(false),
        }
    }

    /// Makes every following request fail at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn status_of(&self, id: ApplicationId) -> Option<ApplicationStatus> {
        self.applications
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.status)
    }

    fn respond(&self, request: &ApiRequest) -> ApiResponse {
        let path = request
            .url
            .strip_prefix(TEST_API_URL)
            .unwrap_or(&request.url)
            .to_string();

        match (request.method, path.as_str()) {
            (Method::Get, "/applications/my") => {
                let mine: Vec<ApplicationDto> = self
                    .applications
                    .borrow()
                    .iter()
                    .filter(|a| a.student_id == TEST_STUDENT_ID)
                    .cloned()
                    .collect();
                ok(json!(mine))
            }
            (Method::Post, "/applications/submit") => self.submit(request),
            (Method::Get, "/housing/applications") => ok(json!(*self.applications.borrow())),
            (Method::Get, "/admin/stats") => {
                let applications = self.applications.borrow();
                let approved = applications
                    .iter()
                    .filter(|a| a.status == ApplicationStatus::Approved)
                    .count();
                ok(json!({
                    "users": TEST_USER_COUNT,
                    "applications": applications.len(),
                    "approved": approved,
                }))
            }
            (Method::Post, path) => self.review(path, request),
            _ => error(404, "Not found"),
        }
    }

    fn submit(&self, request: &ApiRequest) -> ApiResponse {
        let Some(Ok(body)) = request
            .body
            .as_deref()
            .map(|b| serde_json::from_str::<SubmitApplicationDto>(b))
        else {
            return error(400, "Invalid application body");
        };

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let now = Utc::now();
        self.applications.borrow_mut().push(ApplicationDto {
            id,
            student_id: TEST_STUDENT_ID,
            year: body.year,
            major: body.major,
            gender: body.gender,
            room_preference: Some(body.room_preference).filter(|r| !r.is_empty()),
            additional_info: Some(body.additional_info).filter(|r| !r.is_empty()),
            status: ApplicationStatus::Pending,
            submitted_at: now,
            updated_at: Some(now),
            student_name: None,
            email: None,
        });

        ok(json!({ "application_id": id }))
    }

    fn review(&self, path: &str, request: &ApiRequest) -> ApiResponse {
        let Some(rest) = path.strip_prefix("/housing/applications/") else {
            return error(404, "Not found");
        };
        let Some((id, action)) = rest.split_once('/') else {
            return error(404, "Not found");
        };
        let Ok(id) = id.parse::<ApplicationId>() else {
            return error(400, "Invalid application id");
        };

        let target = match action {
            "approve" => ApplicationStatus::Approved,
            "reject" => {
                let reason = request
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str::<RejectApplicationDto>(b).ok());
                if reason.map_or(true, |r| r.reason.trim().is_empty()) {
                    return error(400, "Rejection reason is required");
                }
                ApplicationStatus::Rejected
            }
            _ => return error(404, "Not found"),
        };

        let mut applications = self.applications.borrow_mut();
        let Some(app) = applications.iter_mut().find(|a| a.id == id) else {
            return error(404, "Application not found");
        };
        if app.status != ApplicationStatus::Pending {
            return error(400, "Application has already been reviewed");
        }

        app.status = target;
        app.updated_at = Some(Utc::now());

        ok(json!({ "message": "Application updated" }))
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());

        if self.offline.get() {
            return Err(TransportError("Failed to send request: offline".to_string()));
        }

        Ok(self.respond(&request))
    }
}

/// Client for `backend` holding the test token.
pub fn client(backend: FakeBackend) -> ApiClient<FakeBackend> {
    ApiClient::new(backend, TEST_API_URL, Some(TEST_TOKEN.to_string()))
}

fn ok(body: serde_json::Value) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: body.to_string(),
    }
}

fn error(status: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: json!({ "error": message }).to_string(),
    }
}
