//! hv-pipeline: the five-stage voyage evaluation pipeline.
//!
//! Mission profile → hydrogen demand → energy flow → cost → emissions.
//!
//! Every stage is a pure function over its explicit inputs: no state, no I/O,
//! no randomness. Re-running any stage with identical inputs yields
//! bit-identical output, so repeated and concurrent invocations need no
//! coordination. [`run_pipeline`] threads the stages in order.

pub mod common;
pub mod cost;
pub mod emissions;
pub mod energy;
pub mod error;
pub mod hydrogen;
pub mod mission;

pub use cost::CostBreakdown;
pub use emissions::EmissionsSummary;
pub use energy::EnergyFlow;
pub use error::{PipelineError, PipelineResult};
pub use hydrogen::HydrogenDemand;
pub use mission::MissionProfile;

use hv_scenario::VoyageScenario;
use serde::{Deserialize, Serialize};

/// Output of one full pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyageOutcome {
    pub mission: MissionProfile,
    pub hydrogen: HydrogenDemand,
    pub energy: EnergyFlow,
    pub cost: CostBreakdown,
    pub emissions: EmissionsSummary,
}

/// Run stages 1→5 in strict sequence over one scenario.
///
/// # Errors
/// Propagates stage errors unchanged; nothing is caught or retried here,
/// since identical inputs always reproduce the same failure.
pub fn run_pipeline(scenario: &VoyageScenario) -> PipelineResult<VoyageOutcome> {
    let mission = mission::plan(scenario);
    let hydrogen = hydrogen::evaluate(scenario, &mission)?;
    let energy = energy::deliver(scenario, &hydrogen);
    let cost = cost::estimate(scenario, &energy)?;
    let emissions = emissions::assess(scenario, &energy)?;

    Ok(VoyageOutcome {
        mission,
        hydrogen,
        energy,
        cost,
        emissions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_scenario::{EngineType, VesselType};

    fn roro_crossing() -> VoyageScenario {
        VoyageScenario {
            engine_type: EngineType::FuelCell,
            route_km: 400.0,
            load_factor: 0.8,
            cargo_mass_tons: 3000.0,
            fuel_cost_usd_per_kg: 6.0,
            emission_factor_kg_co2e_per_kg_h2: 10.0,
            carbon_price_usd_per_ton: 100.0,
            enable_orc: false,
            vessel_type: VesselType::RoRo,
        }
    }

    #[test]
    fn runs_end_to_end() {
        let outcome = run_pipeline(&roro_crossing()).unwrap();
        assert!(outcome.cost.total_cost_usd > 0.0);
        assert!(outcome.emissions.total_emissions_kg_co2e > 0.0);
    }

    #[test]
    fn rerun_is_bit_identical() {
        let scenario = roro_crossing();
        let a = run_pipeline(&scenario).unwrap();
        let b = run_pipeline(&scenario).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn energy_flow_mirrors_hydrogen_demand() {
        let outcome = run_pipeline(&roro_crossing()).unwrap();
        assert_eq!(
            outcome.energy.hydrogen_used_kg,
            outcome.hydrogen.hydrogen_needed_kg
        );
        assert_eq!(
            outcome.energy.energy_delivered_kwh,
            outcome.hydrogen.energy_required_kwh
        );
    }
}
