use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
