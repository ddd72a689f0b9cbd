use serde::{Deserialize, Serialize};

/// Aggregate counts returned by `GET /admin/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatsDto {
    /// Registered users
    pub users: u64,
    /// Submitted applications, any status
    pub applications: u64,
    /// Applications with status approved
    pub approved: u64,
}
