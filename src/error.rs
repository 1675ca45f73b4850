//! Error types for mr-approvals

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the approvals core and its transport adapter
///
/// There is deliberately no retry or suppression at this layer: a failed
/// remote call aborts the current operation and propagates to the caller
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitLab API returned a non-success status or an otherwise unusable reply
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// HTTP transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response was missing an expected field or had the wrong shape
    ///
    /// This is a contract violation between us and the service, not a
    /// recoverable condition.
    #[error("unexpected response shape: {0}")]
    Response(#[from] serde_json::Error),

    /// The service reported a version string we cannot parse
    #[error("invalid GitLab version string: {0:?}")]
    Version(String),
}
