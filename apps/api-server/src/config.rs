//! Application configuration loaded from environment variables.
//!
//! Read once at startup and immutable afterwards, so the terminal error
//! middleware can consult it without synchronization.

use std::env;
use std::sync::LazyLock;

use keel_core::i18n::Language;
use keel_infra::RateLimitConfig;

static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

/// Runtime mode. Production redacts internal error detail from responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Self::Production,
            Ok("test") => Self::Test,
            _ => Self::Development,
        }
    }

    /// Whether client-visible 5xx bodies must hide internals.
    pub fn is_prod_like(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub default_language: Language,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: Environment::from_env(),
            default_language: env::var("DEFAULT_LANGUAGE")
                .ok()
                .and_then(|tag| Language::parse(&tag))
                .unwrap_or_default(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }

    /// Process-wide configuration, loaded on first access.
    pub fn global() -> &'static AppConfig {
        &CONFIG
    }
}
