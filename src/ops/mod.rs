//! Operations and observability.
//!
//! - [`observability`] - Counter registry
//! - [`telemetry`] - Tracing setup and the throttled logger

pub mod observability;
pub mod telemetry;
