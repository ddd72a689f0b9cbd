//! The housing staff review queue.
//!
//! The full listing is fetched once and narrowed locally, so changing the status filter never
//! issues a request and the count cards always describe the whole set.

use dioxus_logger::tracing;

use crate::{
    api::transport::Transport,
    error::ApiError,
    model::{
        application::{ApplicationDto, ApplicationId, ApplicationStatus},
        user::Role,
    },
    projection::{format_date, room_preference, StatusBadge},
    remote::{RemoteCollection, SlotKind},
    repository::{ApplicationRepository, StatusFilter},
    workflow::{self, ReviewAction, ReviewActionKind},
};

/// Shown in the actions column of reviewed rows.
pub const REVIEWED_LABEL: &str = "Reviewed";

/// Shown instead of the table when the filter leaves no rows.
pub const NO_APPLICATIONS: &str = "No applications found.";

/// Number of fetched applications per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn from_applications(applications: &[ApplicationDto]) -> Self {
        applications
            .iter()
            .fold(Self::default(), |mut counts, app| {
                counts.total += 1;
                match app.status {
                    ApplicationStatus::Pending => counts.pending += 1,
                    ApplicationStatus::Approved => counts.approved += 1,
                    ApplicationStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Pending => self.pending,
            ApplicationStatus::Approved => self.approved,
            ApplicationStatus::Rejected => self.rejected,
        }
    }
}

/// Records of `applications` in `status`, in their original order.
pub fn partition(applications: &[ApplicationDto], status: ApplicationStatus) -> Vec<&ApplicationDto> {
    applications
        .iter()
        .filter(|app| app.status == status)
        .collect()
}

/// Operation slot a review decision runs in.
pub fn review_slot(action: &ReviewAction) -> SlotKind {
    match action.kind() {
        ReviewActionKind::Approve => SlotKind::Approve,
        ReviewActionKind::Reject => SlotKind::Reject,
    }
}

/// One row of the staff queue table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffQueueRow {
    pub id: ApplicationId,
    /// `#<student_id>`
    pub student: String,
    pub student_name: Option<String>,
    pub email: Option<String>,
    /// `Year <n>`
    pub year: String,
    pub major: String,
    pub room_preference: String,
    pub badge: StatusBadge,
    pub submitted: String,
    pub actions: &'static [ReviewActionKind],
}

impl StaffQueueRow {
    pub fn from_application(app: &ApplicationDto, actor: Role) -> Self {
        Self {
            id: app.id,
            student: format!("#{}", app.student_id),
            student_name: app.student_name.clone(),
            email: app.email.clone(),
            year: format!("Year {}", app.year),
            major: app.major.clone(),
            room_preference: room_preference(&app.room_preference),
            badge: StatusBadge::from(app.status),
            submitted: format_date(&app.submitted_at),
            actions: workflow::available_actions(app.status, actor),
        }
    }

    pub fn is_reviewed(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Every application, as seen by housing staff.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffQueue {
    actor: Role,
    filter: StatusFilter,
    resource: RemoteCollection<ApplicationDto>,
}

impl StaffQueue {
    pub fn new(actor: Role) -> Self {
        Self {
            actor,
            filter: StatusFilter::All,
            resource: RemoteCollection::new(),
        }
    }

    pub fn resource(&self) -> &RemoteCollection<ApplicationDto> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteCollection<ApplicationDto> {
        &mut self.resource
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// The full fetched set, ignoring the filter.
    pub fn applications(&self) -> &[ApplicationDto] {
        self.resource.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_applications(self.applications())
    }

    pub fn visible(&self) -> Vec<&ApplicationDto> {
        self.applications()
            .iter()
            .filter(|app| self.filter.matches(app.status))
            .collect()
    }

    /// Table heading with the number of rows the filter leaves visible.
    pub fn heading(&self) -> String {
        format!("Housing Applications ({})", self.visible().len())
    }

    pub fn rows(&self) -> Vec<StaffQueueRow> {
        self.visible()
            .into_iter()
            .map(|app| StaffQueueRow::from_application(app, self.actor))
            .collect()
    }

    pub async fn load<T: Transport>(&mut self, repo: &ApplicationRepository<'_, T>) -> bool {
        self.resource.refresh(repo.list_all(StatusFilter::All)).await
    }

    /// Checks `action` against the local copy of application `id`.
    ///
    /// Advisory only: an unknown id passes and is left for the backend to judge.
    pub fn check(&self, id: ApplicationId, action: &ReviewAction) -> Result<(), ApiError> {
        let Some(app) = self.applications().iter().find(|app| app.id == id) else {
            return Ok(());
        };

        workflow::transition(app.status, action, self.actor)?;
        Ok(())
    }

    /// Applies a review decision and refetches the queue once the backend accepted it.
    ///
    /// # Returns
    /// - `None` - the same kind of review was already in flight, nothing was sent
    /// - `Some(Ok(()))` - backend accepted the decision, the queue was refetched
    /// - `Some(Err(ApiError))` - refused locally or by the backend, the queue is unchanged
    pub async fn review<T: Transport>(
        &mut self,
        repo: &ApplicationRepository<'_, T>,
        id: ApplicationId,
        action: &ReviewAction,
    ) -> Option<Result<(), ApiError>> {
        if let Err(err) = self.check(id, action) {
            tracing::warn!("Not sending review of application {}: {}", id, err);
            return Some(Err(err));
        }

        self.resource
            .mutate(review_slot(action), repo.review(id, action), move || {
                repo.list_all(StatusFilter::All)
            })
            .await
    }
}
