//! Error types for the hv-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hv-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hv_scenario::ScenarioError> for AppError {
    fn from(err: hv_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<hv_scenario::ValidationError> for AppError {
    fn from(err: hv_scenario::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hv_pipeline::PipelineError> for AppError {
    fn from(err: hv_pipeline::PipelineError) -> Self {
        AppError::Pipeline(err.to_string())
    }
}

impl From<hv_results::ResultsError> for AppError {
    fn from(err: hv_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
