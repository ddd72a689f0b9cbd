//! Application review workflow.
//!
//! ```text
//! pending --approve (housing)-----------> approved
//! pending --reject(reason) (housing)----> rejected
//! approved / rejected: terminal, no action is offered
//! ```
//!
//! These rules only shape what the portal offers. The housing API re-validates every
//! transition and stays the authority; a local check passing never means the backend will
//! accept the request.

use thiserror::Error;

use crate::{
    error::{ApiError, ValidationError},
    model::{application::ApplicationStatus, user::Role},
};

/// A non-blank reason for rejecting an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReason(String);

impl RejectionReason {
    /// Validates a reason, trimming surrounding whitespace.
    ///
    /// # Returns
    /// - `Ok(RejectionReason)` - reason has visible content
    /// - `Err(ValidationError::MissingRejectionReason)` - reason is empty or whitespace
    pub fn new(reason: &str) -> Result<Self, ValidationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::MissingRejectionReason);
        }

        Ok(Self(reason.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewActionKind {
    Approve,
    Reject,
}

impl ReviewActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }
}

/// A review decision taken by housing staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject(RejectionReason),
}

impl ReviewAction {
    pub fn kind(&self) -> ReviewActionKind {
        match self {
            Self::Approve => ReviewActionKind::Approve,
            Self::Reject(_) => ReviewActionKind::Reject,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Only housing staff may review applications, not {0}")]
    RoleNotPermitted(Role),
    #[error("Application is already {0} and cannot be reviewed again")]
    AlreadyReviewed(ApplicationStatus),
}

impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::RoleNotPermitted(_) => Self::Unauthorized,
            TransitionError::AlreadyReviewed(status) => {
                Self::Validation(ValidationError::AlreadyReviewed(status))
            }
        }
    }
}

pub fn is_terminal(status: ApplicationStatus) -> bool {
    !matches!(status, ApplicationStatus::Pending)
}

/// Status an application moves to when `actor` takes `action` on it.
///
/// # Returns
/// - `Ok(ApplicationStatus)` - the resulting status
/// - `Err(TransitionError::RoleNotPermitted)` - actor is not housing staff
/// - `Err(TransitionError::AlreadyReviewed)` - application is no longer pending
pub fn transition(
    from: ApplicationStatus,
    action: &ReviewAction,
    actor: Role,
) -> Result<ApplicationStatus, TransitionError> {
    if actor != Role::Housing {
        return Err(TransitionError::RoleNotPermitted(actor));
    }

    if is_terminal(from) {
        return Err(TransitionError::AlreadyReviewed(from));
    }

    Ok(match action {
        ReviewAction::Approve => ApplicationStatus::Approved,
        ReviewAction::Reject(_) => ApplicationStatus::Rejected,
    })
}

/// Actions the portal may offer `actor` for an application in `status`.
pub fn available_actions(status: ApplicationStatus, actor: Role) -> &'static [ReviewActionKind] {
    const REVIEW: &[ReviewActionKind] = &[ReviewActionKind::Approve, ReviewActionKind::Reject];

    if actor == Role::Housing && !is_terminal(status) {
        REVIEW
    } else {
        &[]
    }
}
