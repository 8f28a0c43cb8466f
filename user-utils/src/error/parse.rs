#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Url parse error: {0}")]
    Url(String),
    #[error("Unsupported url scheme: {0}")]
    UrlScheme(String),
    #[error("Log level parse error: {0}")]
    LogLevel(String),
}
