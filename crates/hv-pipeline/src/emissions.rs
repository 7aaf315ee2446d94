//! Emissions stage.

use crate::common::require_positive_divisor;
use crate::energy::EnergyFlow;
use crate::error::PipelineResult;
use hv_scenario::VoyageScenario;
use serde::{Deserialize, Serialize};

/// CO2-equivalent emissions attributed to one voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsSummary {
    pub total_emissions_kg_co2e: f64,
    pub emissions_per_km_kg_co2e: f64,
    pub emissions_per_ton_km_kg_co2e: f64,
}

/// Attribute well-to-wake CO2e to the voyage's hydrogen consumption.
///
/// Same divisor exposure as the cost stage, guarded the same way.
pub fn assess(
    scenario: &VoyageScenario,
    energy: &EnergyFlow,
) -> PipelineResult<EmissionsSummary> {
    let distance_km = require_positive_divisor("route_km", scenario.route_km)?;
    let cargo_mass_tons = require_positive_divisor("cargo_mass_tons", scenario.cargo_mass_tons)?;

    let total = energy.hydrogen_used_kg * scenario.emission_factor_kg_co2e_per_kg_h2;

    Ok(EmissionsSummary {
        total_emissions_kg_co2e: total,
        emissions_per_km_kg_co2e: total / distance_km,
        emissions_per_ton_km_kg_co2e: total / (distance_km * cargo_mass_tons),
    })
}
