/// Envelope wrapping every payload returned by the user endpoint.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body the service writes alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl ApiErrorBody {
    /// Parses `body` when it carries at least a code or a message.
    pub fn parse(body: &str) -> Option<Self> {
        let parsed: Self = user_utils::serde_func::serde_from_str(body).ok()?;
        if parsed.code.is_none() && parsed.message.is_none() {
            return None;
        }
        Some(parsed)
    }
}
