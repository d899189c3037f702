pub use crate::analysis::{MotorAnalysis, RankMetric};
pub use crate::catalog::{RawMotorRecord, SearchRequest, SearchResponse};

/// Reason a raw catalog record was refused admission.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("non-positive value for {0}")]
    NonPositive(&'static str),
    #[error("empty field: {0}")]
    EmptyField(&'static str),
    #[error("excluded motor type: {0}")]
    ExcludedType(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
