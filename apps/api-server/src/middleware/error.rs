//! Terminal error handling.
//!
//! [`AppError`] is the one error type handlers return. It carries whatever
//! was thrown plus the request's language, so the terminal formatter can
//! translate the generic fallback message. `error_response` is the single
//! place an error body is written.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Value, json};
use std::fmt;

use keel_core::error::{ApiError, Thrown, serialize_error};
use keel_core::i18n::{Language, Translator, resolve_message};
use keel_infra::JsonCatalog;
use keel_shared::{ErrorBody, ErrorIssue};

use crate::config::AppConfig;

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error: a thrown value plus the request language it was
/// raised under.
#[derive(Debug)]
pub struct AppError {
    thrown: Thrown,
    lang: Language,
}

impl AppError {
    /// An operational taxonomy error raised on purpose.
    pub fn api(lang: Language, error: ApiError) -> Self {
        Self {
            thrown: Thrown::Error(error),
            lang,
        }
    }

    /// A timeout signal from the runtime.
    pub fn timeout(lang: Language, err: tokio::time::error::Elapsed) -> Self {
        let detail = err.to_string();
        Self {
            thrown: Thrown::Timeout {
                original: json!(detail),
                detail,
            },
            lang,
        }
    }

    /// A generic error that was not expected to happen.
    pub fn unexpected(lang: Language, err: anyhow::Error) -> Self {
        Self {
            thrown: Thrown::Unexpected {
                message: err.to_string(),
                stack: Some(format!("{err:?}")),
            },
            lang,
        }
    }

    /// An arbitrary non-error value surfaced as a failure.
    pub fn value(lang: Language, value: Value) -> Self {
        Self {
            thrown: Thrown::Value(value),
            lang,
        }
    }

    /// Reduce to the canonical taxonomy error. Total; never fails.
    pub fn normalized(&self) -> ApiError {
        serialize_error(&self.thrown)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

/// Build the wire body for a normalized error.
///
/// In production-like environments 5xx bodies lose their stack and original
/// error and get a generic translated message; everything else keeps full
/// detail for debugging.
pub fn render(
    error: &ApiError,
    lang: Language,
    prod_like: bool,
    translator: &dyn Translator,
) -> ErrorBody {
    let mut body = ErrorBody::new(error.name(), error.message.clone());

    if let Some(data) = &error.data {
        body.issues = data.issues.as_ref().map(|issues| {
            issues
                .iter()
                .map(|issue| ErrorIssue {
                    field: issue.field.clone(),
                    detail: issue.detail.clone(),
                })
                .collect()
        });
        body.stack = data.stack.clone();
        body.original_error = data.original_error.clone();
    }

    if prod_like && error.status_code() >= 500 {
        body = body.redacted(resolve_message(
            "common.somethingWentWrong",
            lang,
            translator,
        ));
    }

    body
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.normalized().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let error = self.normalized();

        if error.status_code() >= 500 {
            tracing::error!(
                name = error.name(),
                status = error.status_code(),
                operational = error.is_operational,
                "{}",
                error.message
            );
        } else {
            tracing::warn!(name = error.name(), status = error.status_code(), "{}", error.message);
        }

        let body = render(
            &error,
            self.lang,
            AppConfig::global().environment.is_prod_like(),
            JsonCatalog::global(),
        );

        // Errors must never be cached.
        HttpResponse::build(self.status_code())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(body)
    }
}
