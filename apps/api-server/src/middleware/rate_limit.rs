//! Rate limiting middleware.
//!
//! Rejections are raised as the taxonomy's TooManyRequests error so the
//! terminal error middleware writes the 429 body like any other failure.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};

use keel_core::error::ApiError;
use keel_core::ports::RateLimiter;

use crate::middleware::error::AppError;
use crate::middleware::language;

/// Rate limiting middleware factory.
pub struct RateLimitMiddleware {
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Arc<dyn RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RateLimitService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitService {
            service,
            limiter: self.limiter.clone(),
        }))
    }
}

pub struct RateLimitService<S> {
    service: S,
    limiter: Arc<dyn RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Key on the client address, honoring proxy headers.
        let key = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        let decision = self.limiter.check(&key);

        if decision.allowed {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        tracing::warn!(
            key = %key,
            retry_after_secs = decision.retry_after.as_secs(),
            "Rate limit exceeded"
        );

        let error = AppError::api(
            language::detect(req.request()),
            ApiError::too_many_requests("Too many requests from this IP, please try again later."),
        );

        Box::pin(async move { Err(error.into()) })
    }
}
