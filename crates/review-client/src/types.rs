//! Wire types for the review endpoint
//!
//! Kept separate from application state so this crate stays reusable.

use serde::Serialize;

/// JSON body of the review request: `{ "code": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub code: String,
}

impl ReviewRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_expected_shape() {
        let body = ReviewRequest::new("fn main() {}");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"code":"fn main() {}"}"#);
    }
}
