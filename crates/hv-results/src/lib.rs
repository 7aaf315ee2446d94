//! hv-results: export rows and baseline comparison over pipeline outcomes.

pub mod baseline;
pub mod report;

pub use baseline::{BaselineComparison, DieselBaseline, DIESEL_ENERGY_KWH_PER_LITER};
pub use report::{flatten_outcome, outcome_to_json, ReportRow};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
