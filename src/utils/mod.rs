//! Utility functions for short code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - Scheme prefix normalization and `Location` encoding

pub mod code_generator;
pub mod url_normalizer;
