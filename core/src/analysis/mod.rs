pub mod classify;
pub mod metrics;
pub mod motor;
pub mod validate;

pub use classify::{ImpulseClass, MICRO_IMPULSE_CEILING_NS};
pub use metrics::{RankMetric, STANDARD_GRAVITY_M_S2};
pub use motor::MotorAnalysis;
pub use validate::QualifiedRecord;
