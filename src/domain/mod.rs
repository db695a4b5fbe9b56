//! Domain layer containing business entities and repository contracts.
//!
//! This module is independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Business logic lives in [`crate::application::services`], concrete storage in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
