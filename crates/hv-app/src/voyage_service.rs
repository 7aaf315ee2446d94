//! Single-voyage evaluation service.

use std::path::Path;

use hv_pipeline::{run_pipeline, VoyageOutcome};
use hv_results::{BaselineComparison, DieselBaseline};
use hv_scenario::{validate_scenario, VoyageScenario};
use serde::Serialize;
use tracing::debug;

use crate::error::AppResult;

/// A fully evaluated voyage: pipeline outcome plus diesel-baseline deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoyageAssessment {
    pub outcome: VoyageOutcome,
    pub baseline: BaselineComparison,
}

/// Load a scenario file (YAML) and validate it.
pub fn load_scenario(path: &Path) -> AppResult<VoyageScenario> {
    let scenario = hv_scenario::load_yaml(path)?;
    Ok(scenario)
}

/// Validate and evaluate one scenario against a diesel baseline.
///
/// Validation runs first so a divide-by-zero scenario is refused before any
/// stage executes; an unvalidated direct pipeline call would still fail, just
/// later and with less context.
pub fn evaluate_voyage(
    scenario: &VoyageScenario,
    baseline: &DieselBaseline,
) -> AppResult<VoyageAssessment> {
    validate_scenario(scenario)?;

    debug!(
        engine = %scenario.engine_type,
        route_km = scenario.route_km,
        "evaluating voyage"
    );

    let outcome = run_pipeline(scenario)?;
    let baseline = baseline.compare(&outcome);

    Ok(VoyageAssessment { outcome, baseline })
}
