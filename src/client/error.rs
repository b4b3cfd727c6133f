//! Error types for the Dropbox API client.

/// Boxed error returned by [`Token`](super::Token) transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by the Dropbox API client.
///
/// HTTP failures are classified by status code; the display string is the
/// message callers see.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not complete the exchange (DNS, connect, timeout).
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] BoxError),

    /// Bad input parameter (400).
    #[error("400 - Bad input parameter - {0}")]
    BadInput(String),

    /// Bad or expired token (401).
    #[error("401 - Bad or expired token")]
    Unauthorized,

    /// Bad OAuth request (403).
    #[error("403 - Bad OAuth request")]
    Forbidden,

    /// Resource not found (404).
    #[error("404 - Not found")]
    NotFound,

    /// Request method not expected (405).
    #[error("405 - Request method not expected - {0}")]
    WrongMethod(String),

    /// Rate limited by the server (429).
    #[error("429 - Rate Limiting in affect")]
    RateLimit,

    /// Any 3xx response.
    #[error("{status} - Redirect Error")]
    Redirect { status: u16 },

    /// Storage quota exceeded (507).
    #[error("507 - Dropbox storage quota exceeded.")]
    StorageQuota,

    /// Server returned an error status with no dedicated variant.
    #[error("{status} - {message}")]
    Api { status: u16, message: String },

    /// JSON decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status the error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadInput(_) => Some(400),
            Error::Unauthorized => Some(401),
            Error::Forbidden => Some(403),
            Error::NotFound => Some(404),
            Error::WrongMethod(_) => Some(405),
            Error::RateLimit => Some(429),
            Error::StorageQuota => Some(507),
            Error::Redirect { status } | Error::Api { status, .. } => Some(*status),
            Error::ConnectionFailed(_) | Error::Json(_) | Error::Http(_) => None,
        }
    }
}
