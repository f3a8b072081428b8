//! HTTP client for the AI review endpoint
//!
//! This crate provides a trait-based client for the review service. The
//! application depends on the [`ReviewClient`] trait, so the network boundary
//! can be swapped for a mock in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          ReviewClient trait          │
//! │  - request_review(code)              │
//! └─────────────────────────────────────┘
//!                   │
//!         ┌─────────┴──────────┐
//!         ▼                    ▼
//! ┌──────────────────┐  ┌──────────────────┐
//! │ HttpReviewClient │  │ test mocks       │
//! │ (reqwest, real)  │  │ (in-crate tests) │
//! └──────────────────┘  └──────────────────┘
//! ```
//!
//! The wire contract is a single operation: `POST <endpoint>` with a JSON
//! body `{ "code": "..." }`; a successful response carries the review as a
//! plain-text (markdown) body.

pub mod client;
pub mod http_client;
pub mod types;

pub use client::{ReviewClient, ReviewError};
pub use http_client::HttpReviewClient;
pub use types::ReviewRequest;
