//! Placeholder values shared by tests.
//!
//! None of these are real credentials.

/// Bearer token every mocked endpoint expects.
pub static TEST_TOKEN: &str = "test-token";

/// Student the `/applications/my` fixtures belong to.
pub const TEST_STUDENT_ID: i64 = 3;

/// Submission time used by application fixtures, 5 March 2025 10:30 UTC.
pub static TEST_SUBMITTED_AT: &str = "2025-03-05T10:30:00Z";

/// Value of the `Authorization` header sent with [`TEST_TOKEN`].
pub fn test_bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}
