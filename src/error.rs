//! Error types shared between the App and Network layers

use thiserror::Error;

/// User-visible failure categories shown in the error banner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("Failed to fetch polls")]
    Fetch,
    #[error("Failed to create poll")]
    Create,
    #[error("Failed to vote")]
    Vote,
}

/// Draft rejected before any request was made
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Please fill in all fields")]
pub struct ValidationError;

/// Failure talking to the poll service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid request url: {0}")]
    Url(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_messages() {
        assert_eq!(PollError::Fetch.to_string(), "Failed to fetch polls");
        assert_eq!(PollError::Create.to_string(), "Failed to create poll");
        assert_eq!(PollError::Vote.to_string(), "Failed to vote");
    }
}
