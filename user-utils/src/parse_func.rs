use std::str::FromStr as _;

/// Parses an absolute http(s) base url.
pub fn base_url_from_str(url: &str) -> Result<reqwest::Url, crate::Error> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| crate::Error::Parse(crate::ParseError::Url(format!("{url}: {e}"))))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(crate::Error::Parse(crate::ParseError::UrlScheme(
            other.to_string(),
        ))),
    }
}

pub fn level_from_str(level: &str) -> Result<tracing::Level, crate::Error> {
    tracing::Level::from_str(level)
        .map_err(|e| crate::Error::Parse(crate::ParseError::LogLevel(format!("{level}: {e}"))))
}
