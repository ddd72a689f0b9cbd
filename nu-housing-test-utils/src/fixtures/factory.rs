use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::constant::TEST_SUBMITTED_AT;

/// Submission time of every application fixture.
pub fn test_submitted_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(TEST_SUBMITTED_AT)
        .unwrap()
        .with_timezone(&Utc)
}

/// Create an application record as listed by `/applications/my`.
///
/// # Arguments
/// - `id` - Application ID
/// - `student_id` - Owning student
/// - `status` - `pending`, `approved` or `rejected`
///
/// # Returns
/// - `Value` - JSON object with RFC 3339 timestamps and no room preference
pub fn mock_application(id: i64, student_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "year": 2,
        "major": "Biology",
        "gender": "Female",
        "room_preference": "",
        "additional_info": "",
        "status": status,
        "submitted_at": TEST_SUBMITTED_AT,
        "updated_at": TEST_SUBMITTED_AT,
    })
}

/// Create an application record as listed by `/housing/applications`.
///
/// Staff listings carry the applicant's name and email, use timestamps without an offset and
/// leave out `updated_at`.
pub fn mock_staff_application(id: i64, student_id: i64, status: &str) -> Value {
    let submitted_at = test_submitted_at()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string();

    json!({
        "id": id,
        "student_id": student_id,
        "year": 3,
        "major": "Computer Science",
        "gender": "Male",
        "room_preference": "Double",
        "additional_info": null,
        "status": status,
        "submitted_at": submitted_at,
        "student_name": format!("Student {}", student_id),
        "email": format!("student{}@nu.edu", student_id),
    })
}

/// Create an `/admin/stats` body.
pub fn mock_admin_stats(users: u64, applications: u64, approved: u64) -> Value {
    json!({
        "users": users,
        "applications": applications,
        "approved": approved,
    })
}

/// Create an `{error}` body.
pub fn mock_error(message: &str) -> Value {
    json!({ "error": message })
}
