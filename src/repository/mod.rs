//! Application repository.
//!
//! Thin, typed wrappers over the housing API endpoints. Each method performs at most one
//! request and never retries; local preconditions (session token, rejection reason) are
//! checked first so a failing precondition never reaches the network.


use std::fmt;

use crate::{
    api::{decode, transport::Transport, ApiClient},
    error::ApiError,
    model::{
        api::{RejectApplicationDto, SubmitApplicationResponseDto},
        application::{ApplicationDraft, ApplicationDto, ApplicationId, ApplicationStatus},
        stats::AdminStatsDto,
    },
    workflow::{RejectionReason, ReviewAction},
};

pub const MY_APPLICATIONS_PATH: &str = "/applications/my";
pub const SUBMIT_APPLICATION_PATH: &str = "/applications/submit";
pub const HOUSING_APPLICATIONS_PATH: &str = "/housing/applications";
pub const ADMIN_STATS_PATH: &str = "/admin/stats";

pub fn approve_path(id: ApplicationId) -> String {
    format!("{}/{}/approve", HOUSING_APPLICATIONS_PATH, id)
}

pub fn reject_path(id: ApplicationId) -> String {
    format!("{}/{}/reject", HOUSING_APPLICATIONS_PATH, id)
}

/// Status narrowing applied to a fetched listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    /// Filter choices in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(ApplicationStatus::Pending),
        Self::Only(ApplicationStatus::Approved),
        Self::Only(ApplicationStatus::Rejected),
    ];

    pub fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == status,
        }
    }

    /// Keeps only the records matching this filter, preserving order.
    pub fn apply(&self, applications: Vec<ApplicationDto>) -> Vec<ApplicationDto> {
        applications
            .into_iter()
            .filter(|app| self.matches(app.status))
            .collect()
    }

    /// Value used by the filter select box.
    pub fn value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }

    /// Parses a select box value; anything unrecognised means no filter.
    pub fn parse(value: &str) -> Self {
        ApplicationStatus::parse(value)
            .map(Self::Only)
            .unwrap_or(Self::All)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Repository for application records held by the housing API.
pub struct ApplicationRepository<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ApplicationRepository<'a, T> {
    /// Creates a new instance of ApplicationRepository.
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Submits a housing application for the signed-in student.
    ///
    /// The new application starts out pending.
    ///
    /// # Returns
    /// - `Ok(ApplicationId)` - id assigned by the backend
    /// - `Err(ApiError::Unauthenticated)` - no session token, nothing was sent
    /// - `Err(ApiError::ServerRejected)` - backend refused the application (e.g. a duplicate)
    /// - `Err(ApiError::Transport)` - request failed or the response was unreadable
    pub async fn submit(&self, draft: &ApplicationDraft) -> Result<ApplicationId, ApiError> {
        let response = self
            .client
            .post_json(SUBMIT_APPLICATION_PATH, &draft.to_request())
            .await?;

        match decode(SUBMIT_APPLICATION_PATH, &response)? {
            SubmitApplicationResponseDto::Created { application_id } => Ok(application_id),
            SubmitApplicationResponseDto::Failed { error } => Err(ApiError::ServerRejected {
                status: response.status,
                message: error,
            }),
        }
    }

    /// Lists the signed-in student's applications in backend order.
    pub async fn list_mine(&self) -> Result<Vec<ApplicationDto>, ApiError> {
        self.client.get_json(MY_APPLICATIONS_PATH).await
    }

    /// Lists every application, narrowed by `filter` after fetching.
    ///
    /// Housing staff only; the backend answers other roles with 403.
    pub async fn list_all(&self, filter: StatusFilter) -> Result<Vec<ApplicationDto>, ApiError> {
        let applications: Vec<ApplicationDto> =
            self.client.get_json(HOUSING_APPLICATIONS_PATH).await?;

        Ok(filter.apply(applications))
    }

    /// Approves an application.
    ///
    /// The current status is not checked here; approving a reviewed application is refused by
    /// the backend and surfaces as `ApiError::ServerRejected`.
    pub async fn approve(&self, id: ApplicationId) -> Result<(), ApiError> {
        self.client.post_empty(&approve_path(id)).await?;
        Ok(())
    }

    /// Rejects an application with a reason.
    ///
    /// # Returns
    /// - `Ok(())` - backend accepted the rejection
    /// - `Err(ApiError::Validation)` - reason is blank, nothing was sent
    /// - `Err(ApiError)` - any other failure, see [`ApplicationRepository::submit`]
    pub async fn reject(&self, id: ApplicationId, reason: &str) -> Result<(), ApiError> {
        let reason = RejectionReason::new(reason)?;
        self.reject_with(id, &reason).await
    }

    pub async fn reject_with(
        &self,
        id: ApplicationId,
        reason: &RejectionReason,
    ) -> Result<(), ApiError> {
        let body = RejectApplicationDto {
            reason: reason.as_str().to_string(),
        };

        self.client.post_json(&reject_path(id), &body).await?;
        Ok(())
    }

    /// Applies a review decision.
    pub async fn review(&self, id: ApplicationId, action: &ReviewAction) -> Result<(), ApiError> {
        match action {
            ReviewAction::Approve => self.approve(id).await,
            ReviewAction::Reject(reason) => self.reject_with(id, reason).await,
        }
    }

    /// Fetches aggregate counts for the admin dashboard.
    pub async fn admin_stats(&self) -> Result<AdminStatsDto, ApiError> {
        self.client.get_json(ADMIN_STATS_PATH).await
    }
}
