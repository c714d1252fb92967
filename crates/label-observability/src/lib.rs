//! # label-observability
//!
//! Structured logging setup, span macros, and the health report built from
//! the embedding provider selection.

pub mod health;
pub mod tracing_setup;

pub use health::{HealthReport, HealthStatus};
pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
