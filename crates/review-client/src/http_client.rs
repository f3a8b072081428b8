//! Reqwest-based review client
//!
//! Direct implementation of the `ReviewClient` trait against a real HTTP
//! endpoint. No retry, no timeout: the request runs until the transport
//! resolves or fails, and a second submission is prevented upstream by the
//! application's single-flight guard.

use crate::client::{ReviewClient, ReviewError};
use crate::types::ReviewRequest;
use async_trait::async_trait;
use log::debug;

/// Direct HTTP client for the review endpoint
#[derive(Debug, Clone)]
pub struct HttpReviewClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpReviewClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client POSTs to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewClient for HttpReviewClient {
    async fn request_review(&self, code: &str) -> Result<String, ReviewError> {
        debug!(
            "Requesting review for {} bytes of code from {}",
            code.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ReviewRequest::new(code))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Rejected {
                status: status.as_u16(),
            });
        }

        // The service answers with the review as a plain-text markdown body
        let body = response.text().await?;
        debug!("Received review ({} bytes)", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_endpoint_verbatim() {
        let client = HttpReviewClient::new("http://localhost:4000/ai/get-review");
        assert_eq!(client.endpoint(), "http://localhost:4000/ai/get-review");
    }
}
