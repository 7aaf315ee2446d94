//! hv-core: stable foundation for hydrovoyage.
//!
//! Contains:
//! - units (uom SI types + constructors for voyage quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HvError, HvResult};
pub use numeric::*;
pub use units::*;
