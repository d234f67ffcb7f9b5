//! Sample resource handlers.

use actix_web::{HttpResponse, web};

use keel_core::domain::Sample;
use keel_core::error::ApiError;
use keel_shared::ApiResponse;
use keel_shared::dto::{
    CreateSampleRequest, PaginationMeta, PaginationQuery, SampleIdParams, SamplePayload,
    SampleResponse, SamplesPayload, UpdateSampleRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::language::RequestLanguage;
use crate::middleware::validate::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

fn to_response(sample: Sample) -> SampleResponse {
    SampleResponse {
        id: sample.id,
        name: sample.name,
    }
}

fn not_found(lang: RequestLanguage) -> AppError {
    AppError::api(
        lang.language(),
        ApiError::not_found(lang.translate("samples.notFound")),
    )
}

/// GET /api/samples
pub async fn list_samples(
    state: web::Data<AppState>,
    lang: RequestLanguage,
    query: ValidatedQuery<PaginationQuery>,
) -> AppResult<HttpResponse> {
    let page = query.0.page.unwrap_or(1);
    let limit = query.0.limit.unwrap_or(10);

    let all = state
        .samples
        .list()
        .await
        .map_err(|err| AppError::unexpected(lang.language(), err.into()))?;

    let meta = PaginationMeta::new(page, limit, all.len());
    // Skip arithmetic saturates; a page far past the end yields an empty list.
    let samples = all
        .into_iter()
        .skip((page as usize - 1).saturating_mul(limit as usize))
        .take(limit as usize)
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SamplesPayload { samples, meta })))
}

/// POST /api/samples
pub async fn create_sample(
    state: web::Data<AppState>,
    lang: RequestLanguage,
    body: ValidatedJson<CreateSampleRequest>,
) -> AppResult<HttpResponse> {
    let sample = state
        .samples
        .insert(Sample::new(body.0.name))
        .await
        .map_err(|err| AppError::unexpected(lang.language(), err.into()))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(SamplePayload {
        sample: to_response(sample),
    })))
}

/// GET /api/samples/{id}
pub async fn get_sample(
    state: web::Data<AppState>,
    lang: RequestLanguage,
    path: ValidatedPath<SampleIdParams>,
) -> AppResult<HttpResponse> {
    let sample = state
        .samples
        .find_by_id(path.0.id)
        .await
        .map_err(|err| AppError::unexpected(lang.language(), err.into()))?
        .ok_or_else(|| not_found(lang))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SamplePayload {
        sample: to_response(sample),
    })))
}

/// PATCH /api/samples/{id}
pub async fn update_sample(
    state: web::Data<AppState>,
    lang: RequestLanguage,
    path: ValidatedPath<SampleIdParams>,
    body: ValidatedJson<UpdateSampleRequest>,
) -> AppResult<HttpResponse> {
    let sample = state
        .samples
        .update(path.0.id, body.0.name)
        .await
        .map_err(|err| AppError::unexpected(lang.language(), err.into()))?
        .ok_or_else(|| not_found(lang))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SamplePayload {
        sample: to_response(sample),
    })))
}

/// DELETE /api/samples/{id}
pub async fn delete_sample(
    state: web::Data<AppState>,
    lang: RequestLanguage,
    path: ValidatedPath<SampleIdParams>,
) -> AppResult<HttpResponse> {
    let deleted = state
        .samples
        .delete(path.0.id)
        .await
        .map_err(|err| AppError::unexpected(lang.language(), err.into()))?;

    if !deleted {
        return Err(not_found(lang));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::empty()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::handlers::{configure_routes, not_found};
    use crate::state::AppState;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new()))
                    .configure(configure_routes)
                    .default_service(web::route().to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_sample_returns_the_created_resource() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples")
            .set_json(json!({"name": "Test Sample"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["payload"]["sample"]["name"], json!("Test Sample"));
        assert!(body["payload"]["sample"]["id"].is_string());
    }

    #[actix_web::test]
    async fn create_without_a_name_fails_validation() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            res.headers().get("Cache-Control").unwrap(),
            "no-store"
        );
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["name"], json!("UnprocessableEntityError"));
        assert_eq!(body["message"], json!("Validation failed"));
        assert_eq!(
            body["issues"],
            json!([{"field": "name", "detail": "Name is required"}])
        );
    }

    #[actix_web::test]
    async fn validation_messages_follow_the_lang_query_parameter() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples?lang=tr")
            .set_json(json!({"name": ""}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], json!("Doğrulama başarısız oldu"));
        assert_eq!(body["issues"][0]["detail"], json!("İsim gereklidir"));
    }

    #[actix_web::test]
    async fn malformed_ids_fail_validation() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/samples/not-a-uuid")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["issues"][0]["field"], json!("id"));
        assert_eq!(body["issues"][0]["detail"], json!("Invalid sample ID"));
    }

    #[actix_web::test]
    async fn unknown_samples_return_404() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri(&format!("/api/samples/{}", Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"name": "NotFoundError", "message": "Sample not found"})
        );
    }

    #[actix_web::test]
    async fn list_paginates_with_coerced_query_values() {
        let app = test_app!();

        for name in ["First", "Second", "Third"] {
            let req = test::TestRequest::post()
                .uri("/api/samples")
                .set_json(json!({"name": name}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/samples?page=2&limit=2")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["payload"]["page"], json!(2));
        assert_eq!(body["payload"]["totalPages"], json!(2));
        assert_eq!(body["payload"]["totalCount"], json!(3));
        assert_eq!(body["payload"]["samples"][0]["name"], json!("Third"));
        assert_eq!(body["payload"]["samples"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn list_returns_an_empty_page_far_past_the_end() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples")
            .set_json(json!({"name": "Only"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        // page * limit would overflow u32; the skip must saturate instead.
        let req = test::TestRequest::get()
            .uri("/api/samples?page=42949674&limit=100")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["payload"]["samples"], json!([]));
        assert_eq!(body["payload"]["totalCount"], json!(1));
    }

    #[actix_web::test]
    async fn list_rejects_pages_beyond_the_supported_range() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/samples?page=99999999999")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["issues"][0]["field"], json!("page"));
    }

    #[actix_web::test]
    async fn list_rejects_out_of_range_pagination() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/samples?page=abc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["issues"][0]["field"], json!("page"));
    }

    #[actix_web::test]
    async fn update_renames_an_existing_sample() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples")
            .set_json(json!({"name": "Before"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["payload"]["sample"]["id"].as_str().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/samples/{id}"))
            .set_json(json!({"name": "After"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["payload"]["sample"]["name"], json!("After"));
    }

    #[actix_web::test]
    async fn update_of_a_missing_sample_returns_404() {
        let app = test_app!();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/samples/{}", Uuid::new_v4()))
            .set_json(json!({"name": "After"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_removes_the_sample() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/samples")
            .set_json(json!({"name": "Doomed"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["payload"]["sample"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/samples/{id}"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": true}));

        let req = test::TestRequest::get()
            .uri(&format!("/api/samples/{id}"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unmatched_routes_respond_through_the_taxonomy() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/nope").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["name"], json!("NotFoundError"));
    }
}
