use std::fmt;

use async_trait::async_trait;

use super::types::PrayerTimes;

/// Errors that can occur while fetching prayer times.
/// Every variant is fatal to the session; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Transport(String),
    /// The API answered with an error, either as an HTTP status or as a
    /// non-200 `code` in the response envelope.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "could not decode response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of prayer times. The runtime calls `fetch` at most once per
/// process, on a spawned task, and only looks at the `Result`.
#[async_trait]
pub trait FetchBackend: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<PrayerTimes, FetchError>;
}
