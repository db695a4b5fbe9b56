//! HTML form method override.
//!
//! Browsers only submit forms as `GET` or `POST`. A `POST` may name the verb it
//! really means either in the `_method` query parameter
//! (`<form method="POST" action="/urls/abc?_method=DELETE">`) or in the
//! `X-HTTP-Method-Override` header. The request is re-dispatched with that
//! method before routing.
//!
//! Only `PUT`, `PATCH` and `DELETE` may be requested; anything else is ignored.

use axum::{
    extract::{Query, Request},
    http::{HeaderName, Method},
};
use serde::Deserialize;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Query parameter carrying the overriding verb.
pub const METHOD_QUERY_PARAM: &str = "_method";

/// Header carrying the overriding verb.
pub const METHOD_OVERRIDE_HEADER: HeaderName =
    HeaderName::from_static("x-http-method-override");

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Layer applying [`MethodOverride`] to a service.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodOverrideLayer;

impl<S> Layer<S> for MethodOverrideLayer {
    type Service = MethodOverride<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MethodOverride { inner }
    }
}

/// Service rewriting the method of overridden `POST` requests.
#[derive(Debug, Clone)]
pub struct MethodOverride<S> {
    inner: S,
}

impl<S> Service<Request> for MethodOverride<S>
where
    S: Service<Request>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        if let Some(method) = overridden_method(&req) {
            tracing::debug!(%method, uri = %req.uri(), "Method override applied");
            *req.method_mut() = method;
        }

        self.inner.call(req)
    }
}

/// Returns the method a `POST` request asks to be treated as, if any.
///
/// The query parameter wins over the header.
fn overridden_method(req: &Request) -> Option<Method> {
    if req.method() != Method::POST {
        return None;
    }

    let from_query = Query::<OverrideQuery>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(q)| q.method);

    let from_header = || {
        req.headers()
            .get(METHOD_OVERRIDE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    from_query.or_else(from_header).and_then(|m| parse_method(&m))
}

fn parse_method(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
