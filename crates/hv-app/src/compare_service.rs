//! Engine comparison and distance sweep services.
//!
//! Comparison reports are produced from fresh, independent pipeline
//! invocations per variant; nothing is carried over between runs.

use hv_results::DieselBaseline;
use hv_scenario::{EngineType, VoyageScenario};
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::voyage_service::{evaluate_voyage, VoyageAssessment};

/// Per-engine hydrogen prices, as quoted in the original comparison mode
/// (ultra-pure fuel-cell hydrogen is priced above combustion-grade).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnginePricing {
    pub fuel_cell_usd_per_kg: f64,
    pub hydrogen_ice_usd_per_kg: f64,
}

impl EnginePricing {
    pub fn price_for(&self, engine: EngineType) -> f64 {
        match engine {
            EngineType::FuelCell => self.fuel_cell_usd_per_kg,
            EngineType::HydrogenIce => self.hydrogen_ice_usd_per_kg,
        }
    }
}

/// Both engine variants evaluated over one otherwise identical scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineComparison {
    pub fuel_cell: VoyageAssessment,
    pub hydrogen_ice: VoyageAssessment,
}

impl EngineComparison {
    /// Extra hydrogen the ICE burns over the fuel cell for the same mission.
    pub fn hydrogen_penalty_kg(&self) -> f64 {
        self.hydrogen_ice.outcome.hydrogen.hydrogen_needed_kg
            - self.fuel_cell.outcome.hydrogen.hydrogen_needed_kg
    }
}

/// Run the pipeline independently for both engine types.
pub fn compare_engines(
    scenario: &VoyageScenario,
    pricing: Option<EnginePricing>,
    baseline: &DieselBaseline,
) -> AppResult<EngineComparison> {
    let per_engine = |engine: EngineType| -> AppResult<VoyageAssessment> {
        let mut variant = scenario.with_engine(engine);
        if let Some(pricing) = pricing {
            variant.fuel_cost_usd_per_kg = pricing.price_for(engine);
        }
        evaluate_voyage(&variant, baseline)
    };

    debug!(route_km = scenario.route_km, "comparing engine variants");

    Ok(EngineComparison {
        fuel_cell: per_engine(EngineType::FuelCell)?,
        hydrogen_ice: per_engine(EngineType::HydrogenIce)?,
    })
}

/// One point of a distance sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub distance_km: f64,
    pub cost_per_km_usd: f64,
    pub emissions_per_km_kg_co2e: f64,
    pub total_cost_usd: f64,
    pub total_emissions_kg_co2e: f64,
}

/// Evaluate a scenario across a range of route distances.
///
/// Each distance is an independent invocation over its own scenario copy.
pub fn distance_sweep(
    scenario: &VoyageScenario,
    distances_km: &[f64],
    baseline: &DieselBaseline,
) -> AppResult<Vec<SweepPoint>> {
    let mut points = Vec::with_capacity(distances_km.len());

    for &distance_km in distances_km {
        let mut variant = scenario.clone();
        variant.route_km = distance_km;
        let assessment = evaluate_voyage(&variant, baseline)?;

        points.push(SweepPoint {
            distance_km,
            cost_per_km_usd: assessment.outcome.cost.cost_per_km_usd,
            emissions_per_km_kg_co2e: assessment.outcome.emissions.emissions_per_km_kg_co2e,
            total_cost_usd: assessment.outcome.cost.total_cost_usd,
            total_emissions_kg_co2e: assessment.outcome.emissions.total_emissions_kg_co2e,
        });
    }

    Ok(points)
}

/// Inclusive arithmetic range of sweep distances.
pub fn sweep_distances(from_km: f64, to_km: f64, step_km: f64) -> AppResult<Vec<f64>> {
    if !(from_km.is_finite() && from_km > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "sweep start must be > 0 km, got {from_km}"
        )));
    }
    if !(step_km.is_finite() && step_km > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "sweep step must be > 0 km, got {step_km}"
        )));
    }
    if to_km < from_km {
        return Err(AppError::InvalidInput(format!(
            "sweep end {to_km} km is before start {from_km} km"
        )));
    }

    let mut distances = Vec::new();
    let mut d = from_km;
    while d <= to_km {
        distances.push(d);
        d += step_km;
    }
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_distances_inclusive_range() {
        let d = sweep_distances(200.0, 1000.0, 200.0).unwrap();
        assert_eq!(d, vec![200.0, 400.0, 600.0, 800.0, 1000.0]);
    }

    #[test]
    fn sweep_distances_rejects_bad_ranges() {
        assert!(sweep_distances(0.0, 1000.0, 200.0).is_err());
        assert!(sweep_distances(200.0, 100.0, 50.0).is_err());
        assert!(sweep_distances(200.0, 1000.0, 0.0).is_err());
    }
}
