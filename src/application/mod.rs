//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup, editing and removal

pub mod services;
