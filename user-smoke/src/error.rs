#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Backend error: {0}")]
    Backend(#[from] user_backend::Error),
    #[error("Utils error: {0}")]
    Utils(#[from] user_utils::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("test run aborted")]
    Aborted,
    #[error("expectations failed: {}", .0.join("; "))]
    Expectation(Vec<String>),
}
