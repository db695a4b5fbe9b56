//! Browser-facing layer: route handlers and server-rendered pages.
//!
//! Uses Askama templates for server-side rendering. HTML forms cannot issue
//! `PUT` or `DELETE`, so [`middleware::method_override`] lets a `POST` carry the
//! intended verb.
//!
//! # Modules
//!
//! - [`handlers`] - Route handlers and their templates
//! - [`middleware`] - Method override and request tracing
//! - [`routes`] - Route table

pub mod handlers;
pub mod middleware;
pub mod routes;
