//! Catalog schema and performance-metric core for the ThrustCurve motor
//! analyzer.
//!
//! The modules cover the fetch -> qualify -> derive pipeline: an explicit
//! wire schema for the catalog service, admission rules for raw records,
//! and the derived efficiency ratios the reports rank by.

pub mod analysis;
pub mod catalog;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use prelude::{ValidationError, ValidationResult};
