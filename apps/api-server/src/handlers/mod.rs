//! HTTP handlers and route configuration.

mod health;
mod sample;

use actix_web::{HttpResponse, web};

use keel_core::error::ApiError;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::language::RequestLanguage;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/samples")
                    .route("", web::get().to(sample::list_samples))
                    .route("", web::post().to(sample::create_sample))
                    .route("/{id}", web::get().to(sample::get_sample))
                    .route("/{id}", web::patch().to(sample::update_sample))
                    .route("/{id}", web::delete().to(sample::delete_sample)),
            ),
    );
}

/// Fallback for unmatched routes - responds through the taxonomy.
pub async fn not_found(lang: RequestLanguage) -> AppResult<HttpResponse> {
    Err(AppError::api(
        lang.language(),
        ApiError::not_found("Resource not found"),
    ))
}
