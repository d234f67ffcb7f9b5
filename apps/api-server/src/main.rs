//! # Keel API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod schemas;
mod state;

use config::AppConfig;
use keel_core::ports::RateLimiter;
use keel_infra::InMemoryRateLimiter;
use middleware::cache_control::CacheControlMiddleware;
use middleware::rate_limit::RateLimitMiddleware;
use middleware::request_id::RequestIdMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let config = AppConfig::global();

    tracing::info!(
        "Starting Keel API server on {}:{} ({:?})",
        config.host,
        config.port,
        config.environment
    );

    let state = AppState::new();
    let limiter: Arc<dyn RateLimiter> =
        Arc::new(InMemoryRateLimiter::new(config.rate_limit.clone()));

    HttpServer::new(move || {
        // wrap() runs outermost-last: rate limiting rejects before routing,
        // cache-control decorates whatever comes back.
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(CacheControlMiddleware)
            .wrap(RateLimitMiddleware::new(limiter.clone()))
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,keel_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
