use thiserror::Error;

use crate::model::application::ApplicationStatus;

/// Input rejected before a request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Year must be a whole number, got {0:?}")]
    YearNotNumeric(String),
    #[error("Year must be a positive number, got {0}")]
    YearNotPositive(i32),
    #[error("Major is required")]
    MissingMajor,
    #[error("A reason is required to reject an application")]
    MissingRejectionReason,
    #[error("Application is already {0} and cannot be reviewed again")]
    AlreadyReviewed(ApplicationStatus),
}
