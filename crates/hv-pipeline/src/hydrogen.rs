//! Hydrogen demand stage.

use crate::common::check_finite;
use crate::error::PipelineResult;
use crate::mission::MissionProfile;
use hv_core::units::constants::h2_lhv;
use hv_core::units::{hr, kw, unitless};
use hv_scenario::{EngineType, VoyageScenario};
use serde::{Deserialize, Serialize};

/// Rated shaft power of the reference vessel, kW.
///
/// Placeholder RoRo-class figure; the mission load factor scales it per
/// voyage. Vessel-specific rated power is a future refinement (the scenario
/// already carries `vessel_type` for it).
pub const BASE_POWER_KW: f64 = 1500.0;

/// Propulsion energy and hydrogen mass required for the mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrogenDemand {
    pub engine_type: EngineType,
    pub adjusted_power_kw: f64,
    pub energy_required_kwh: f64,
    pub efficiency: f64,
    pub hydrogen_needed_kg: f64,
}

/// Convert the mission profile into a hydrogen demand record.
///
/// ## Model
///
/// ```text
/// P_adj = P_base * load_factor
/// E_req = P_adj * duration
/// m_H2  = E_req / (LHV_H2 * eta)
/// ```
///
/// `eta` is looked up on the closed [`EngineType`] set (0.50 fuel cell,
/// 0.38 hydrogen ICE). An unknown engine tag cannot reach this stage: the
/// scenario boundary already rejected it as `UnsupportedEngineType`.
pub fn evaluate(
    scenario: &VoyageScenario,
    mission: &MissionProfile,
) -> PipelineResult<HydrogenDemand> {
    use uom::si::energy::kilowatt_hour;
    use uom::si::mass::kilogram;
    use uom::si::power::kilowatt;

    let efficiency = scenario.engine_type.efficiency();

    let adjusted_power = kw(BASE_POWER_KW) * unitless(mission.load_factor);
    let energy_required = adjusted_power * hr(mission.duration_hours);
    let hydrogen_needed = energy_required / (h2_lhv() * unitless(efficiency));

    Ok(HydrogenDemand {
        engine_type: scenario.engine_type,
        adjusted_power_kw: adjusted_power.get::<kilowatt>(),
        energy_required_kwh: energy_required.get::<kilowatt_hour>(),
        efficiency,
        hydrogen_needed_kg: check_finite(hydrogen_needed.get::<kilogram>(), "hydrogen_needed_kg")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission;
    use hv_core::numeric::{nearly_equal, Tolerances};
    use hv_core::units::constants::H2_LHV_KWH_PER_KG;
    use hv_scenario::VesselType;

    fn scenario(engine_type: EngineType) -> VoyageScenario {
        VoyageScenario {
            engine_type,
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

    fn demand_for(engine_type: EngineType) -> HydrogenDemand {
        let s = scenario(engine_type);
        let m = mission::plan(&s);
        evaluate(&s, &m).unwrap()
    }

    #[test]
    fn fuel_cell_demand_matches_the_model() {
        let tol = Tolerances::default();
        let d = demand_for(EngineType::FuelCell);

        assert!(nearly_equal(d.adjusted_power_kw, 1200.0, tol));
        assert!(nearly_equal(d.energy_required_kwh, 16_000.0, tol));
        assert_eq!(d.efficiency, 0.50);
        assert!(nearly_equal(
            d.hydrogen_needed_kg,
            16_000.0 / (H2_LHV_KWH_PER_KG * 0.50),
            tol
        ));
    }

    #[test]
    fn ice_needs_more_hydrogen_for_the_same_energy() {
        let fuel_cell = demand_for(EngineType::FuelCell);
        let ice = demand_for(EngineType::HydrogenIce);

        assert_eq!(fuel_cell.energy_required_kwh, ice.energy_required_kwh);
        assert!(ice.hydrogen_needed_kg > fuel_cell.hydrogen_needed_kg);
        assert!(nearly_equal(
            ice.hydrogen_needed_kg,
            16_000.0 / (H2_LHV_KWH_PER_KG * 0.38),
            Tolerances::default()
        ));
    }
}
