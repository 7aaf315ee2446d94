//! Voyage cost stage.

use crate::common::require_positive_divisor;
use crate::energy::EnergyFlow;
use crate::error::PipelineResult;
use hv_scenario::VoyageScenario;
use serde::{Deserialize, Serialize};

/// Kilograms per metric ton, for carbon pricing.
const KG_PER_TON: f64 = 1000.0;

/// Fuel and carbon cost of one voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fuel_cost_usd: f64,
    pub carbon_cost_usd: f64,
    pub total_cost_usd: f64,
    pub cost_per_km_usd: f64,
    pub cost_per_ton_km_usd: f64,
}

/// Price the voyage's hydrogen consumption.
///
/// ## Model
///
/// ```text
/// fuel   = price_per_kg * m_H2
/// carbon = (m_H2 * EF / 1000) * carbon_price     (per metric ton of CO2e)
/// total  = fuel + carbon
/// ```
///
/// Unit costs divide by route length and by route length × cargo mass.
///
/// # Errors
/// `InvalidDistanceOrMass` when `route_km` or `cargo_mass_tons` is not
/// strictly positive; unit costs are undefined there and Inf/NaN must never
/// escape as "valid" fields.
pub fn estimate(scenario: &VoyageScenario, energy: &EnergyFlow) -> PipelineResult<CostBreakdown> {
    let distance_km = require_positive_divisor("route_km", scenario.route_km)?;
    let cargo_mass_tons = require_positive_divisor("cargo_mass_tons", scenario.cargo_mass_tons)?;

    let fuel_cost = scenario.fuel_cost_usd_per_kg * energy.hydrogen_used_kg;
    let emissions_ton =
        energy.hydrogen_used_kg * scenario.emission_factor_kg_co2e_per_kg_h2 / KG_PER_TON;
    let carbon_cost = emissions_ton * scenario.carbon_price_usd_per_ton;
    let total_cost = fuel_cost + carbon_cost;

    Ok(CostBreakdown {
        fuel_cost_usd: fuel_cost,
        carbon_cost_usd: carbon_cost,
        total_cost_usd: total_cost,
        cost_per_km_usd: total_cost / distance_km,
        cost_per_ton_km_usd: total_cost / (distance_km * cargo_mass_tons),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use hv_core::numeric::{nearly_equal, Tolerances};
    use hv_scenario::{EngineType, VesselType};

    fn scenario() -> VoyageScenario {
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

    fn flow() -> EnergyFlow {
        EnergyFlow {
            energy_delivered_kwh: 16_000.0,
            hydrogen_used_kg: 960.0,
        }
    }

    #[test]
    fn prices_fuel_and_carbon() {
        let tol = Tolerances::default();
        let cost = estimate(&scenario(), &flow()).unwrap();

        assert!(nearly_equal(cost.fuel_cost_usd, 6.0 * 960.0, tol));
        // 960 kg H2 * 10 kg CO2e/kg = 9.6 t CO2e at 100 USD/t.
        assert!(nearly_equal(cost.carbon_cost_usd, 960.0, tol));
        assert_eq!(
            cost.total_cost_usd,
            cost.fuel_cost_usd + cost.carbon_cost_usd
        );
    }

    #[test]
    fn unit_costs_divide_exactly() {
        let cost = estimate(&scenario(), &flow()).unwrap();
        assert_eq!(cost.cost_per_km_usd, cost.total_cost_usd / 400.0);
        assert_eq!(
            cost.cost_per_ton_km_usd,
            cost.total_cost_usd / (400.0 * 3000.0)
        );
    }

    #[test]
    fn zero_carbon_price_leaves_fuel_cost_only() {
        let mut s = scenario();
        s.carbon_price_usd_per_ton = 0.0;
        let cost = estimate(&s, &flow()).unwrap();
        assert_eq!(cost.carbon_cost_usd, 0.0);
        assert_eq!(cost.total_cost_usd, cost.fuel_cost_usd);
    }

    #[test]
    fn rejects_zero_distance_instead_of_emitting_infinity() {
        let mut s = scenario();
        s.route_km = 0.0;
        let err = estimate(&s, &flow()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidDistanceOrMass {
                field: "route_km",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_cargo_mass() {
        let mut s = scenario();
        s.cargo_mass_tons = -5.0;
        assert!(matches!(
            estimate(&s, &flow()).unwrap_err(),
            PipelineError::InvalidDistanceOrMass {
                field: "cargo_mass_tons",
                ..
            }
        ));
    }
}
