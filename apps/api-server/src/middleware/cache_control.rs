//! Cache-Control middleware.
//!
//! Applies a static directive per route class unless something downstream
//! already set the header (error responses always own `no-store`).

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::http::header::{self, HeaderValue};
use actix_web::http::Method;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};

/// Default Cache-Control directive for a route class.
fn directive(method: &Method, path: &str) -> &'static str {
    if path.starts_with("/api/health") {
        return "no-cache";
    }

    if path.starts_with("/api") {
        let mutating = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];
        if mutating.contains(method) {
            return "no-store";
        }
        return "no-cache";
    }

    "no-cache"
}

pub struct CacheControlMiddleware;

impl<S, B> Transform<S, ServiceRequest> for CacheControlMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CacheControlService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CacheControlService { service }))
    }
}

pub struct CacheControlService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CacheControlService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().clone();
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if !res.headers().contains_key(header::CACHE_CONTROL) {
                res.headers_mut().insert(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(directive(&method, &path)),
                );
            }

            Ok(res)
        })
    }
}
