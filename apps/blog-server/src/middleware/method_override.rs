//! Method override middleware - lets HTML forms issue PUT, PATCH and DELETE.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use serde::Deserialize;
use std::future::{Ready, ready};

/// Header consulted when the query string carries no override.
pub static METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

/// Middleware that rewrites `POST` requests carrying a `_method` query
/// parameter (or the override header) before routing.
///
/// ```html
/// <form action="/blogs/42?_method=DELETE" method="POST">
/// ```
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if *req.method() == Method::POST {
            if let Some(method) = requested_method(&req) {
                tracing::debug!(path = req.path(), method = %method, "Overriding POST");
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}

#[derive(Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn requested_method(req: &ServiceRequest) -> Option<Method> {
    let from_query = web::Query::<OverrideQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().method);

    let requested = from_query.or_else(|| {
        req.headers()
            .get(METHOD_OVERRIDE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    })?;

    parse_override(&requested)
}

/// Only methods a form cannot send natively are accepted.
fn parse_override(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
