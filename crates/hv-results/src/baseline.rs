//! Diesel baseline comparison.
//!
//! The two headline figures (baseline emissions over the route and carbon
//! savings) sit outside the five-stage pipeline but complete the same
//! computation, reading the emissions record the pipeline produced.

use hv_pipeline::VoyageOutcome;
use serde::{Deserialize, Serialize};

/// Energy content of marine diesel, kWh per liter.
pub const DIESEL_ENERGY_KWH_PER_LITER: f64 = 10.7;

/// Diesel reference the hydrogen voyage is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DieselBaseline {
    /// Fleet-average diesel emissions per route km.
    pub emission_factor_kg_co2e_per_km: f64,
    /// Bunker price at the quay.
    pub price_usd_per_liter: f64,
}

impl Default for DieselBaseline {
    fn default() -> Self {
        Self {
            emission_factor_kg_co2e_per_km: 70.0,
            price_usd_per_liter: 0.8,
        }
    }
}

/// Hydrogen voyage vs diesel baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub baseline_emissions_total_kg_co2e: f64,
    /// Negative when the baseline outperforms the scenario.
    pub carbon_savings_kg_co2e: f64,
    pub diesel_equivalent_cost_usd: f64,
    pub fuel_savings_usd: f64,
}

impl DieselBaseline {
    /// Baseline fleet emissions over a route.
    pub fn emissions_over(&self, route_km: f64) -> f64 {
        self.emission_factor_kg_co2e_per_km * route_km
    }

    /// Cost of covering the same delivered energy with diesel.
    pub fn equivalent_cost(&self, energy_delivered_kwh: f64) -> f64 {
        energy_delivered_kwh / DIESEL_ENERGY_KWH_PER_LITER * self.price_usd_per_liter
    }

    /// Compare a completed voyage outcome against this baseline.
    pub fn compare(&self, outcome: &VoyageOutcome) -> BaselineComparison {
        let baseline_total = self.emissions_over(outcome.mission.distance_km);
        let diesel_cost = self.equivalent_cost(outcome.energy.energy_delivered_kwh);

        BaselineComparison {
            baseline_emissions_total_kg_co2e: baseline_total,
            carbon_savings_kg_co2e: baseline_total - outcome.emissions.total_emissions_kg_co2e,
            diesel_equivalent_cost_usd: diesel_cost,
            fuel_savings_usd: diesel_cost - outcome.cost.fuel_cost_usd,
        }
    }
}
