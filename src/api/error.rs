/// Failure of a single request against the classifier API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The configured base URL could not be turned into an endpoint URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    /// The request never reached the server (DNS, refused connection, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("API returned HTTP {status}")]
    Status { status: u16, body: String },
    /// The body was missing, too large or not the expected JSON shape.
    #[error("Unexpected API response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status code when the server was reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line message suitable for an alert banner.
    ///
    /// FastAPI error bodies carry a `detail` field; when present it is appended
    /// to the status line.
    pub fn display_message(&self) -> String {
        match self {
            Self::Status { status, body } => match detail_from_body(body) {
                Some(detail) => format!("API returned HTTP {status}: {detail}"),
                None => format!("API returned HTTP {status}"),
            },
            other => other.to_string(),
        }
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    (!detail.is_empty()).then(|| detail.to_string())
}
