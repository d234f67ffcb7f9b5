//! Health check endpoint.

use actix_web::HttpResponse;

use keel_shared::ApiResponse;
use keel_shared::dto::HealthPayload;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(HealthPayload {
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
