pub mod export;
pub mod writer;

pub use writer::{generate_reports, MICRO_REPORT_SUFFIX};
