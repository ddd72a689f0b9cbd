use crate::{
    api::transport::Transport,
    model::stats::AdminStatsDto,
    remote::RemoteResource,
    repository::ApplicationRepository,
};

/// Shown when the counts could not be loaded.
pub const STATS_UNAVAILABLE: &str = "Stats not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
}

/// Aggregate counts for administrators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminStatsView {
    resource: RemoteResource<AdminStatsDto>,
}

impl AdminStatsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&self) -> &RemoteResource<AdminStatsDto> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteResource<AdminStatsDto> {
        &mut self.resource
    }

    /// Users, applications and approvals, or `None` while nothing has been loaded.
    pub fn cards(&self) -> Option<[StatCard; 3]> {
        let stats = self.resource.value()?;

        Some([
            StatCard {
                label: "Total Users",
                value: stats.users,
            },
            StatCard {
                label: "Total Applications",
                value: stats.applications,
            },
            StatCard {
                label: "Approved Applications",
                value: stats.approved,
            },
        ])
    }

    /// Whether the "Stats not available" notice replaces the cards.
    pub fn is_unavailable(&self) -> bool {
        self.resource.value().is_none() && !self.resource.is_loading()
    }

    pub async fn load<T: Transport>(&mut self, repo: &ApplicationRepository<'_, T>) -> bool {
        self.resource.refresh(repo.admin_stats()).await
    }
}
