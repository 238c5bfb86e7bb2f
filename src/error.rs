//! Error types for the provider clients and the query façade.

use thiserror::Error;

/// Error raised by provider calls (track catalog and artist catalog).
///
/// These never reach callers of [`crate::SongsExplorer`] directly: they are
/// either absorbed (biography lookup) or replaced by a [`QueryError`].
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Track was not found by the track catalog.
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Artist was not found by the artist catalog.
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),

    /// Provider answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the provider.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// A required field was missing from the provider payload.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// HTTP request failed (connection, timeout, body decoding).
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Provider-reported error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Caller-facing error of the query operations.
///
/// Messages are fixed; the underlying cause is logged, not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The track catalog could not deliver the requested track.
    #[error("Unable to fetch track details")]
    TrackDetails,

    /// The track catalog search failed.
    #[error("Unable to search tracks")]
    SearchTracks,
}
