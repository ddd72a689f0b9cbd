//! Read models behind the three dashboards.
//!
//! Each projection owns a [`RemoteResource`](crate::remote::RemoteResource) with its own copy of
//! the fetched records and maps them into display rows. Nothing here renders; the client turns
//! rows into markup.

pub mod admin_stats;
pub mod my_applications;
pub mod staff_queue;

use chrono::{DateTime, Utc};

use crate::model::application::ApplicationStatus;

pub use admin_stats::{AdminStatsView, StatCard};
pub use my_applications::{MyApplicationRow, MyApplications};
pub use staff_queue::{StaffQueue, StaffQueueRow, StatusCounts};

/// Shown in place of an absent room preference.
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Amber,
    Green,
    Red,
}

impl BadgeColor {
    pub fn for_status(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Self::Amber,
            ApplicationStatus::Approved => Self::Green,
            ApplicationStatus::Rejected => Self::Red,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Amber => "badge-warning",
            Self::Green => "badge-success",
            Self::Red => "badge-error",
        }
    }
}

/// Capitalised status label with its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl From<ApplicationStatus> for StatusBadge {
    fn from(status: ApplicationStatus) -> Self {
        Self {
            label: status.label(),
            color: BadgeColor::for_status(status),
        }
    }
}

/// `Mar 5, 2025, 10:30 AM`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// `Mar 5, 2025`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

pub(crate) fn room_preference(value: &Option<String>) -> String {
    value
        .as_deref()
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}
