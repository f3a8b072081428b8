//! Review request middleware
//!
//! Owns the network boundary: a tokio runtime and a [`ReviewClient`].
//! On submit it snapshots the editor buffer, spawns the HTTP call and
//! dispatches the completion back through the action channel, so the UI
//! keeps running while the request is in flight.
//!
//! The single-flight guard lives here: a submit arriving while a request
//! is outstanding is consumed before any network call is issued, and the
//! reducer never observes it.

use crate::actions::{Action, ReviewAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use review_client::{HttpReviewClient, ReviewClient};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// What the user sees on any failure; the cause stays in the log file.
pub const GENERIC_FAILURE: &str = "Failed to get code review. Please try again.";

/// Middleware that performs review requests against the endpoint
pub struct ReviewMiddleware {
    /// Tokio runtime for the async HTTP call
    runtime: Runtime,
    /// The review endpoint client (mockable in tests)
    client: Arc<dyn ReviewClient>,
}

impl ReviewMiddleware {
    /// Create the middleware with a real HTTP client for `endpoint`
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(Arc::new(HttpReviewClient::new(endpoint)))
    }

    /// Create the middleware with an injected client
    pub fn with_client(client: Arc<dyn ReviewClient>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self { runtime, client }
    }

    fn submit(&self, state: &AppState, dispatcher: &Dispatcher) {
        let code = state.editor.code();
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.request_review(&code).await {
                Ok(review) => {
                    log::info!("Review received ({} bytes)", review.len());
                    dispatcher.dispatch(Action::Review(ReviewAction::Completed(review)));
                }
                Err(e) => {
                    // Diagnostics only - the UI gets the generic message
                    log::error!("Review request failed: {}", e);
                    dispatcher
                        .dispatch(Action::Review(ReviewAction::Failed(GENERIC_FAILURE.into())));
                }
            }
        });
    }
}

impl Middleware for ReviewMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Review(ReviewAction::Submit) = action {
            if state.review.request.is_loading() {
                // At most one request in flight; drop the submission whole
                log::debug!("Submit ignored: a review request is already in flight");
                return false;
            }
            self.submit(state, dispatcher);
        }
        true
    }
}

#[cfg(test)]
pub use test_support::MockReviewClient;

#[cfg(test)]
pub mod test_support {
    use async_trait::async_trait;
    use review_client::{ReviewClient, ReviewError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum MockBehavior {
        Succeed(String),
        FailWithStatus(u16),
        /// Never resolves - keeps the pipeline in Loading
        Pending,
    }

    /// Scripted review client counting how many calls actually went out.
    pub struct MockReviewClient {
        behavior: MockBehavior,
        calls: Arc<AtomicUsize>,
    }

    impl MockReviewClient {
        pub fn succeeding(body: &str) -> Self {
            Self {
                behavior: MockBehavior::Succeed(body.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                behavior: MockBehavior::FailWithStatus(status),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn pending() -> Self {
            Self {
                behavior: MockBehavior::Pending,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Shared call counter, valid after the client moved into the
        /// middleware.
        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    #[async_trait]
    impl ReviewClient for MockReviewClient {
        async fn request_review(&self, _code: &str) -> Result<String, ReviewError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                MockBehavior::Succeed(body) => Ok(body.clone()),
                MockBehavior::FailWithStatus(status) => {
                    Err(ReviewError::Rejected { status: *status })
                }
                MockBehavior::Pending => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::RequestState;
    use std::sync::atomic::Ordering;
    use std::sync::mpsc;
    use std::time::Duration;

    fn loading_state() -> AppState {
        let mut state = AppState::new();
        state.review.request = RequestState::Loading;
        state
    }

    #[test]
    fn submit_spawns_exactly_one_request() {
        let mock = MockReviewClient::succeeding("OK looks good");
        let calls = mock.call_counter();
        let mut mw = ReviewMiddleware::with_client(Arc::new(mock));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let passed = mw.handle(
            &Action::Review(ReviewAction::Submit),
            &AppState::new(),
            &dispatcher,
        );
        assert!(passed, "submit must reach the reducer to enter Loading");

        let completion = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(
            completion,
            Action::Review(ReviewAction::Completed(body)) if body == "OK looks good"
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn submit_while_loading_issues_no_network_call() {
        let mock = MockReviewClient::succeeding("unused");
        let calls = mock.call_counter();
        let mut mw = ReviewMiddleware::with_client(Arc::new(mock));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let passed = mw.handle(
            &Action::Review(ReviewAction::Submit),
            &loading_state(),
            &dispatcher,
        );
        assert!(!passed, "submit while loading must be consumed");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn failure_maps_to_generic_message_without_detail() {
        let mock = MockReviewClient::failing(500);
        let mut mw = ReviewMiddleware::with_client(Arc::new(mock));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        mw.handle(
            &Action::Review(ReviewAction::Submit),
            &AppState::new(),
            &dispatcher,
        );

        let completion = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match completion {
            Action::Review(ReviewAction::Failed(message)) => {
                assert_eq!(message, GENERIC_FAILURE);
                assert!(!message.contains("500"), "status detail must not leak");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn other_actions_pass_through_untouched() {
        let mock = MockReviewClient::succeeding("unused");
        let calls = mock.call_counter();
        let mut mw = ReviewMiddleware::with_client(Arc::new(mock));
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let passed = mw.handle(
            &Action::Review(ReviewAction::ScrollDown(1)),
            &AppState::new(),
            &dispatcher,
        );
        assert!(passed);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
