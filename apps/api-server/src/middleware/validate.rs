//! Request validation extractors.
//!
//! Each extractor validates one slice of the request (path parameters,
//! query parameters, JSON body) against the schema associated with the
//! target DTO, then deserializes the validated object. Failures raise an
//! UnprocessableEntity error whose issues are translated for the request's
//! language.
//!
//! The validated object is a new value passed explicitly to the handler;
//! nothing on the request is mutated in place. For query parameters this
//! means handlers see coerced types (numbers, not strings).

use std::collections::HashMap;
use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use keel_core::error::{ApiError, ErrorData};
use keel_core::i18n::{Language, resolve_message, translate_issues};
use keel_core::schema::{RequestPart, Schema};
use keel_infra::JsonCatalog;

use crate::middleware::error::AppError;
use crate::middleware::language;

/// Associates a DTO with the schema that validates its raw form.
pub trait ValidateSchema: DeserializeOwned {
    fn schema() -> &'static Schema;
}

/// Validated path parameters.
pub struct ValidatedPath<T>(pub T);

/// Validated, coerced query parameters.
pub struct ValidatedQuery<T>(pub T);

/// Validated JSON body.
pub struct ValidatedJson<T>(pub T);

/// Validate a raw object and deserialize it into the DTO.
fn run<T: ValidateSchema>(part: RequestPart, raw: &Value, lang: Language) -> Result<T, AppError> {
    let catalog = JsonCatalog::global();

    match T::schema().validate(raw) {
        Ok(validated) => serde_json::from_value(Value::Object(validated))
            .map_err(|err| AppError::unexpected(lang, err.into())),
        Err(raw_issues) => {
            tracing::debug!(
                part = part.as_str(),
                issues = raw_issues.len(),
                "Request validation failed"
            );
            let issues = translate_issues(&raw_issues, lang, catalog);
            let message = resolve_message("common.validationFailed", lang, catalog);
            Err(AppError::api(
                lang,
                ApiError::unprocessable_entity(message).with_data(ErrorData {
                    issues: Some(issues),
                    ..ErrorData::default()
                }),
            ))
        }
    }
}

impl<T: ValidateSchema> FromRequest for ValidatedPath<T> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let lang = language::detect(req);

        let mut raw = Map::new();
        for (name, value) in req.match_info().iter() {
            raw.insert(name.to_string(), Value::String(value.to_string()));
        }

        ready(run::<T>(RequestPart::Params, &Value::Object(raw), lang).map(ValidatedPath))
    }
}

impl<T: ValidateSchema> FromRequest for ValidatedQuery<T> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let lang = language::detect(req);

        // Query values arrive as strings; the schema coerces declared
        // numeric fields.
        let raw: Map<String, Value> =
            web::Query::<HashMap<String, String>>::from_query(req.query_string())
                .map(web::Query::into_inner)
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();

        ready(run::<T>(RequestPart::Query, &Value::Object(raw), lang).map(ValidatedQuery))
    }
}

impl<T: ValidateSchema + 'static> FromRequest for ValidatedJson<T> {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let lang = language::detect(req);
        let json = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let raw = json
                .await
                .map_err(|err| AppError::api(lang, ApiError::bad_request(err.to_string())))?
                .into_inner();
            run::<T>(RequestPart::Body, &raw, lang).map(ValidatedJson)
        })
    }
}
