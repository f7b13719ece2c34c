//! # Errors and display messages
//!
//! [`ApiError`] covers everything that can go wrong between a form submit and
//! a rendered result. Views never show the raw error; they call
//! [`ApiError::display_message`] with a page-specific fallback, which walks:
//!
//! 1. the response body, when it is a non-blank string;
//! 2. the response body's `message`, when the body is an object (an object
//!    without a usable `message` stops here and yields the fallback);
//! 3. the error's own message, when non-blank;
//! 4. the fallback.

use serde_json::Value;
use store::SessionError;
use thiserror::Error;

use crate::validate::ValidationError;

/// What a failed response carried.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Empty,
    Text(String),
    Json(Value),
}

impl ResponseBody {
    /// Classify a raw response body. A JSON string literal counts as text.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return ResponseBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::String(s)) => ResponseBody::Text(s),
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, no response received.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: ResponseBody },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Response did not contain a list of {0}")]
    UnexpectedShape(&'static str),

    #[error("Backend did not return account number")]
    MissingAccountNumber,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    pub fn response_body(&self) -> Option<&ResponseBody> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the request was blocked before reaching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Best-effort human-readable message, `fallback` when nothing usable.
    pub fn display_message(&self, fallback: &str) -> String {
        match self.response_body() {
            Some(ResponseBody::Text(text)) if !text.trim().is_empty() => return text.clone(),
            Some(ResponseBody::Json(Value::Object(map))) => {
                return map
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or(fallback)
                    .to_string();
            }
            Some(ResponseBody::Json(Value::Array(_))) => return fallback.to_string(),
            _ => {}
        }

        let own = self.to_string();
        if own.trim().is_empty() {
            fallback.to_string()
        } else {
            own
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(body: ResponseBody) -> ApiError {
        ApiError::Status { status: 400, body }
    }

    #[test]
    fn test_string_body_wins() {
        let err = status(ResponseBody::from_text("Insufficient funds".to_string()));
        assert_eq!(err.display_message("Withdraw failed"), "Insufficient funds");

        // JSON string literal
        let err = status(ResponseBody::from_text("\"Insufficient funds\"".to_string()));
        assert_eq!(err.display_message("Withdraw failed"), "Insufficient funds");
    }

    #[test]
    fn test_object_message() {
        let err = status(ResponseBody::from_text(r#"{"message":"Account not found"}"#.to_string()));
        assert_eq!(err.display_message("Failed to load accounts"), "Account not found");
    }

    #[test]
    fn test_object_without_message_uses_fallback() {
        let err = status(ResponseBody::Json(json!({"error": "Bad Request", "message": "  "})));
        assert_eq!(err.display_message("Deposit failed"), "Deposit failed");

        let err = status(ResponseBody::Json(json!(["a"])));
        assert_eq!(err.display_message("Deposit failed"), "Deposit failed");
    }

    #[test]
    fn test_empty_body_uses_own_message() {
        let err = status(ResponseBody::from_text("   ".to_string()));
        assert_eq!(err.response_body(), Some(&ResponseBody::Empty));
        assert_eq!(
            err.display_message("Transfer failed"),
            "Request failed with status code 400"
        );
    }

    #[test]
    fn test_non_response_errors() {
        assert_eq!(
            ApiError::MissingAccountNumber.display_message("Something went wrong"),
            "Backend did not return account number"
        );
        let err = ApiError::from(ValidationError::InvalidAmount);
        assert!(err.is_validation());
        assert_eq!(err.display_message("Deposit failed"), "Enter a valid amount");
    }

    #[test]
    fn test_never_empty() {
        let err = ApiError::Decode(String::new());
        assert!(!err.display_message("Failed to load transactions").is_empty());
    }
}
