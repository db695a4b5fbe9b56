//! Core domain entities.
//!
//! The service has a single entity, [`Link`]: a short code paired with the long
//! URL it redirects to. [`NewLink`] carries the data needed to create one.

pub mod link;

pub use link::{Link, NewLink};
