//! Review client trait and error type
//!
//! Defines the core `ReviewClient` trait that all client implementations
//! must satisfy, and the error taxonomy for the network boundary.

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by the review endpoint boundary.
///
/// The two classes are deliberately coarse: the UI collapses both into a
/// single generic failure message, so the distinction only matters for
/// diagnostics.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Network unreachable, connection reset, request construction failure
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server rejected request with status {status}")]
    Rejected { status: u16 },
}

/// Review service client trait
///
/// Defines the interface for requesting an AI review of a piece of source
/// code. Implementations must be `Send + Sync` so they can be shared with
/// the async task that performs the request.
#[async_trait]
pub trait ReviewClient: Send + Sync {
    /// Submit `code` for review and return the review text.
    ///
    /// The returned string is markdown as produced by the review service;
    /// no parsing or validation happens at this layer.
    async fn request_review(&self, code: &str) -> Result<String, ReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Canned;

    #[async_trait]
    impl ReviewClient for Canned {
        async fn request_review(&self, _code: &str) -> Result<String, ReviewError> {
            Ok("OK looks good".to_string())
        }
    }

    #[tokio::test]
    async fn the_trait_is_object_safe() {
        let client: Arc<dyn ReviewClient> = Arc::new(Canned);
        let review = client.request_review("fn main() {}").await.unwrap();
        assert_eq!(review, "OK looks good");
    }
}
