//! Errors from the vision API collaborator.

/// Errors that can occur while asking the vision API for a description.
///
/// None of these are retried; the batch driver aborts on the first one.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("{0} is not set in the environment")]
    MissingApiKey(&'static str),

    #[error("request to {0} failed: {1}")]
    Transport(String, #[source] curl::Error),

    #[error("vision API returned HTTP {0}: {1}")]
    Http(u32, String),

    #[error("invalid response from vision API: {0}")]
    InvalidResponse(String),

    #[error("vision API response contained no choices")]
    NoChoices,
}
