use thiserror::Error;

/// Errors returned by the Spotify client.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed with status {status}")]
    Auth { status: u16 },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SpotifyError {
    /// HTTP status of the failed response, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Auth { status } | SpotifyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SpotifyError::Timeout
        } else {
            SpotifyError::Connection(err.to_string())
        }
    }
}

/// A batch audio features lookup failed. The whole lookup is aborted.
#[derive(Debug, Error)]
#[error("Failed to fetch audio features: {source}")]
pub struct FeatureFetchError {
    #[from]
    source: SpotifyError,
}

impl FeatureFetchError {
    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }

    pub fn kind(&self) -> &SpotifyError {
        &self.source
    }
}
