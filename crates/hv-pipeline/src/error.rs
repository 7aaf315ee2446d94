//! Error types for pipeline stages.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A unit-cost or intensity divisor was not strictly positive. There is
    /// no recovery path: the caller must supply a corrected scenario.
    #[error("Invalid distance or mass: {field} = {value} (must be > 0)")]
    InvalidDistanceOrMass { field: &'static str, value: f64 },

    #[error("Non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
