//! Reports domain - CSV export, profile cards and statistics
//!
//! File downloads are served by the HTTP export routes. GraphQL only
//! exposes the summary figures.

pub mod actions;
pub mod csv_export;
pub mod data;
pub mod edges;
pub mod errors;
pub mod pdf;
pub mod statistics;

pub use actions::ReportFile;
pub use errors::ReportError;
pub use statistics::ReportSummary;
