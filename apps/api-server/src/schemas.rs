//! Request schemas.
//!
//! Custom messages are i18n translation keys resolved by the validation
//! extractors against the request's language; keys must exist in the
//! locale files under `crates/keel-infra/locales/`.

use std::sync::LazyLock;

use keel_core::schema::{Field, Schema};
use keel_shared::dto::{
    CreateSampleRequest, PaginationQuery, SampleIdParams, UpdateSampleRequest,
};

use crate::middleware::validate::ValidateSchema;

static SAMPLE_ID_PARAMS: LazyLock<Schema> =
    LazyLock::new(|| Schema::new().field(Field::uuid("id").message("validation.sample.invalidId")));

static CREATE_SAMPLE_BODY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new().field(
        Field::string("name")
            .non_empty()
            .message("validation.sample.nameRequired"),
    )
});

static UPDATE_SAMPLE_BODY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new().field(
        Field::string("name")
            .non_empty()
            .message("validation.sample.nameRequired"),
    )
});

static PAGINATION_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    // page is capped at u32::MAX so it always fits the DTO field.
    Schema::new()
        .field(Field::number("page").optional().min(1).max(u32::MAX as i64))
        .field(Field::number("limit").optional().min(1).max(100))
});

impl ValidateSchema for SampleIdParams {
    fn schema() -> &'static Schema {
        &SAMPLE_ID_PARAMS
    }
}

impl ValidateSchema for CreateSampleRequest {
    fn schema() -> &'static Schema {
        &CREATE_SAMPLE_BODY
    }
}

impl ValidateSchema for UpdateSampleRequest {
    fn schema() -> &'static Schema {
        &UPDATE_SAMPLE_BODY
    }
}

impl ValidateSchema for PaginationQuery {
    fn schema() -> &'static Schema {
        &PAGINATION_QUERY
    }
}
