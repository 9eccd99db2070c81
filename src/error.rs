use reqwest::StatusCode;

/// Failures at the remote API boundary. The view collapses all of these into
/// a generic message; the variants exist for logging and tests.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// What the detail view shows when a fetch did not produce a post.
/// `NotFound` (successful-but-empty fetch) is distinct from `FetchFailed`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("Could not load the post.")]
    FetchFailed,
    #[error("This post does not exist.")]
    NotFound,
}
