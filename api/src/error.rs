use thiserror::Error;

/// Errors produced by [`crate::ApiClient`].
///
/// There are exactly two kinds: the exchange never completed (or the response
/// body could not be decoded), or the backend understood the request and
/// refused it with a structured `detail` message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not complete, or the response was not parseable.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend returned a non-2xx status.
    #[error("{detail}")]
    Rejected {
        /// HTTP status code of the refusal.
        status: u16,
        /// Message from the backend's `{detail}` body, or a generic fallback.
        detail: String,
    },
}

impl ApiError {
    /// The backend-provided message, if this is a rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => Some(detail),
            ApiError::Network(_) => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}
