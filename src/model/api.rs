use serde::{Deserialize, Serialize};

use crate::model::application::ApplicationId;

/// The response when an error occurs with an API request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Body of `POST /applications/submit`
///
/// Optional draft fields are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitApplicationDto {
    pub year: i32,
    pub major: String,
    pub gender: String,
    pub room_preference: String,
    pub additional_info: String,
}

/// Response of `POST /applications/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitApplicationResponseDto {
    Created { application_id: ApplicationId },
    Failed { error: String },
}

/// Body of `POST /housing/applications/{id}/reject`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectApplicationDto {
    pub reason: String,
}
