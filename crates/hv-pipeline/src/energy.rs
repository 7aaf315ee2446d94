//! Energy flow stage.

use crate::hydrogen::HydrogenDemand;
use hv_scenario::VoyageScenario;
use serde::{Deserialize, Serialize};

/// Energy delivered to the shaft and fuel drawn from the tanks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFlow {
    pub energy_delivered_kwh: f64,
    pub hydrogen_used_kg: f64,
}

/// Normalize hydrogen demand into the energy-flow record.
///
/// Today this is an identity rename. It stays a separate stage so conversion
/// losses (compression, boil-off) can be charged here later without touching
/// the cost or emissions contracts downstream.
pub fn deliver(_scenario: &VoyageScenario, demand: &HydrogenDemand) -> EnergyFlow {
    EnergyFlow {
        energy_delivered_kwh: demand.energy_required_kwh,
        hydrogen_used_kg: demand.hydrogen_needed_kg,
    }
}
