//! Standardized API response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard successful API response envelope: `{success: true, payload}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
        }
    }

    /// Success with no payload (e.g. a delete).
    pub fn empty() -> Self {
        Self {
            success: true,
            payload: None,
        }
    }
}

/// One field-level failure as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub detail: String,
}

/// Wire shape of every error response.
///
/// `stack` and `originalError` are present only in non-production-like
/// environments for 5xx errors; see [`ErrorBody::redacted`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ErrorIssue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_error: Option<Value>,
}

impl ErrorBody {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            issues: None,
            stack: None,
            original_error: None,
        }
    }

    pub fn with_issues(mut self, issues: Vec<ErrorIssue>) -> Self {
        self.issues = Some(issues);
        self
    }

    /// Strip internals and replace the message with a generic fallback.
    /// Applied to 5xx bodies in production-like environments.
    pub fn redacted(mut self, fallback_message: String) -> Self {
        self.stack = None;
        self.original_error = None;
        self.message = fallback_message;
        self
    }
}
