//! Shared guards for stage calculations.

use crate::error::{PipelineError, PipelineResult};
use hv_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a computed field is finite before it lands in a record.
pub fn check_finite(value: f64, what: &'static str) -> PipelineResult<f64> {
    ensure_finite(value, what).map_err(|_| PipelineError::NonFinite { what, value })
}

/// Divisors must be finite and strictly positive; anything else would leak
/// Inf/NaN into "valid" result fields.
pub fn require_positive_divisor(field: &'static str, value: f64) -> PipelineResult<f64> {
    ensure_positive(value, field)
        .map_err(|_| PipelineError::InvalidDistanceOrMass { field, value })
}
