use thiserror::Error;

/// Failures surfaced by [`crate::CatalogApiClient`] operations.
///
/// An empty listing is never an error; it decodes as an empty collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server or no response arrived.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with HTTP {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns the HTTP status for server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
