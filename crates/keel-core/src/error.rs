//! Error taxonomy and normalization.
//!
//! Every operational failure in the API is one of a closed set of kinds,
//! each with a fixed HTTP status code and a stable wire name. Anything else
//! a handler can surface is reduced to a taxonomy member by
//! [`serialize_error`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The closed set of operational error kinds.
///
/// Status code and wire name are fixed per variant and never passed by
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code bound to this kind.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Stable name written to response bodies.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequestError",
            Self::Unauthorized => "UnauthorizedError",
            Self::Forbidden => "ForbiddenError",
            Self::NotFound => "NotFoundError",
            Self::Conflict => "ConflictError",
            Self::UnprocessableEntity => "UnprocessableEntityError",
            Self::TooManyRequests => "TooManyRequestsError",
            Self::InternalServerError => "InternalServerError",
            Self::ServiceUnavailable => "ServiceUnavailableError",
        }
    }
}

/// A single field-level validation failure, already translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Dotted path into the validated object, absent for object-level
    /// failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub detail: String,
}

/// Structured payload attached to an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorData {
    pub issues: Option<Vec<Issue>>,
    pub stack: Option<String>,
    pub original_error: Option<Value>,
}

/// An operational API error: one taxonomy kind plus a human message and
/// optional structured data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// `true` for expected business-rule rejections, `false` for conditions
    /// that indicate a defect (uncaught errors, timeouts).
    pub is_operational: bool,
    pub data: Option<ErrorData>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            is_operational: true,
            data: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// Attach structured data (issues, stack, original error).
    pub fn with_data(mut self, data: ErrorData) -> Self {
        self.data = Some(data);
        self
    }

    /// Mark this error as unexpected despite being explicitly raised.
    pub fn non_operational(mut self) -> Self {
        self.is_operational = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Anything a request pipeline can surface, before normalization.
///
/// The HTTP layer maps framework-specific failures into these variants:
/// `tokio::time::error::Elapsed` becomes `Timeout`, a generic error becomes
/// `Unexpected`, and a raw non-error value becomes `Value`.
#[derive(Debug, Clone)]
pub enum Thrown {
    /// Already a taxonomy member.
    Error(ApiError),
    /// A timeout signal from the platform.
    Timeout { detail: String, original: Value },
    /// A generic error with its message and, when available, a stack/trace
    /// rendering.
    Unexpected {
        message: String,
        stack: Option<String>,
    },
    /// An arbitrary non-error value.
    Value(Value),
}

/// Reduce any thrown value to exactly one [`ApiError`].
///
/// Total: every input produces a valid taxonomy member, and this function
/// never fails itself.
pub fn serialize_error(thrown: &Thrown) -> ApiError {
    match thrown {
        Thrown::Error(err) => err.clone(),
        Thrown::Timeout { detail, original } => {
            ApiError::service_unavailable(detail.clone())
                .non_operational()
                .with_data(ErrorData {
                    original_error: Some(original.clone()),
                    ..ErrorData::default()
                })
        }
        Thrown::Unexpected { message, stack } => ApiError::internal(message.clone())
            .non_operational()
            .with_data(ErrorData {
                stack: stack.clone(),
                ..ErrorData::default()
            }),
        Thrown::Value(value) => ApiError::internal("An unexpected error occurred")
            .non_operational()
            .with_data(ErrorData {
                original_error: Some(value.clone()),
                ..ErrorData::default()
            }),
    }
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend failed: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_codes_are_fixed_per_kind() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::TooManyRequests.status_code(), 429);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn names_match_the_wire_format() {
        assert_eq!(ErrorKind::NotFound.name(), "NotFoundError");
        assert_eq!(ErrorKind::InternalServerError.name(), "InternalServerError");
        assert_eq!(
            ErrorKind::UnprocessableEntity.name(),
            "UnprocessableEntityError"
        );
    }

    #[test]
    fn constructors_default_to_operational() {
        let err = ApiError::not_found("Sample not found");
        assert!(err.is_operational);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.name(), "NotFoundError");
        assert!(err.data.is_none());
    }

    #[test]
    fn taxonomy_members_pass_through_unchanged() {
        let original = ApiError::conflict("already exists");
        let normalized = serialize_error(&Thrown::Error(original.clone()));
        assert_eq!(normalized, original);
    }

    #[test]
    fn timeouts_become_service_unavailable() {
        let normalized = serialize_error(&Thrown::Timeout {
            detail: "deadline has elapsed".into(),
            original: json!("deadline has elapsed"),
        });
        assert_eq!(normalized.status_code(), 503);
        assert!(!normalized.is_operational);
        assert!(normalized.data.unwrap().original_error.is_some());
    }

    #[test]
    fn generic_errors_become_internal_with_stack() {
        let normalized = serialize_error(&Thrown::Unexpected {
            message: "io failure".into(),
            stack: Some("at main".into()),
        });
        assert_eq!(normalized.status_code(), 500);
        assert!(!normalized.is_operational);
        assert_eq!(normalized.message, "io failure");
        assert_eq!(normalized.data.unwrap().stack.as_deref(), Some("at main"));
    }

    #[test]
    fn arbitrary_values_become_internal_with_original_error() {
        let normalized = serialize_error(&Thrown::Value(json!("boom")));
        assert_eq!(normalized.status_code(), 500);
        assert_eq!(normalized.message, "An unexpected error occurred");
        assert_eq!(
            normalized.data.unwrap().original_error,
            Some(json!("boom"))
        );
    }

    #[test]
    fn normalization_covers_null_and_objects() {
        for value in [json!(null), json!({"any": "thing"}), json!(42)] {
            let normalized = serialize_error(&Thrown::Value(value));
            assert_eq!(normalized.status_code(), 500);
        }
    }
}
