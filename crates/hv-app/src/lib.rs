//! Shared application service layer for hydrovoyage.
//!
//! This crate provides a unified interface for frontends, centralizing
//! scenario loading, validation, pipeline execution, baseline comparison,
//! engine comparison and distance sweeps behind one error type.

pub mod compare_service;
pub mod error;
pub mod voyage_service;

// Re-export key types for convenience
pub use compare_service::{
    compare_engines, distance_sweep, sweep_distances, EngineComparison, EnginePricing, SweepPoint,
};
pub use error::{AppError, AppResult};
pub use voyage_service::{evaluate_voyage, load_scenario, VoyageAssessment};
