//! Diagnostics domain - session error log, health check and app info

pub mod actions;
pub mod data;
pub mod edges;

pub use actions::{DiagnosticsError, HealthError};
