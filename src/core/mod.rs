//! Core infrastructure.
//!
//! - [`config`] - Configuration parsing and validation
//! - [`time`] - Clock abstraction for rate limiting
//! - [`error`] - Annotation error types

pub mod config;
pub mod error;
pub mod time;
