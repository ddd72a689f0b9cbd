use crate::{
    api::transport::Transport,
    error::ApiError,
    model::application::{ApplicationDraft, ApplicationDto, ApplicationId},
    projection::{format_timestamp, room_preference, StatusBadge},
    remote::{RemoteCollection, SlotKind},
    repository::ApplicationRepository,
};

/// One row of the student's application table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyApplicationRow {
    pub id: ApplicationId,
    pub year: i32,
    pub major: String,
    pub room_preference: String,
    pub badge: StatusBadge,
    pub submitted: String,
}

impl From<&ApplicationDto> for MyApplicationRow {
    fn from(app: &ApplicationDto) -> Self {
        Self {
            id: app.id,
            year: app.year,
            major: app.major.clone(),
            room_preference: room_preference(&app.room_preference),
            badge: StatusBadge::from(app.status),
            submitted: format_timestamp(&app.submitted_at),
        }
    }
}

/// The signed-in student's own applications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyApplications {
    resource: RemoteCollection<ApplicationDto>,
}

impl MyApplications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&self) -> &RemoteCollection<ApplicationDto> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteCollection<ApplicationDto> {
        &mut self.resource
    }

    pub fn applications(&self) -> &[ApplicationDto] {
        self.resource.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Rows in backend order.
    pub fn rows(&self) -> Vec<MyApplicationRow> {
        self.applications().iter().map(MyApplicationRow::from).collect()
    }

    /// Most recently submitted application, shown on the status card.
    pub fn latest(&self) -> Option<&ApplicationDto> {
        self.applications().iter().max_by_key(|app| app.submitted_at)
    }

    /// Table header, e.g. `My Applications (2)`.
    pub fn heading(&self) -> String {
        format!("My Applications ({})", self.applications().len())
    }

    pub async fn load<T: Transport>(&mut self, repo: &ApplicationRepository<'_, T>) -> bool {
        self.resource.refresh(repo.list_mine()).await
    }

    /// Submits `draft` and refetches the listing once the backend accepted it.
    ///
    /// `None` means a submission was already in flight and nothing was sent.
    pub async fn submit<T: Transport>(
        &mut self,
        repo: &ApplicationRepository<'_, T>,
        draft: &ApplicationDraft,
    ) -> Option<Result<ApplicationId, ApiError>> {
        self.resource
            .mutate(SlotKind::Submit, repo.submit(draft), move || repo.list_mine())
            .await
    }
}
