//! Tabular report rows for export and charting consumers.
//!
//! Consumers get named numeric columns only; how they render them (CSV,
//! chart, dashboard) is their business.

use crate::ResultsResult;
use hv_pipeline::VoyageOutcome;
use serde::Serialize;

/// One flattened export row: engine label plus `<stage>_<field>` columns in
/// stage order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub engine: String,
    pub columns: Vec<(String, f64)>,
}

impl ReportRow {
    /// Look up a column by its full prefixed name.
    pub fn column(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|&(_, v)| v)
    }

    /// Column names in export order.
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|(col, _)| col.as_str()).collect()
    }
}

/// Flatten one outcome into a report row.
///
/// Column names are `<stage>_<field>`, matching the record fields one-to-one;
/// the engine tag rides separately as the row label.
pub fn flatten_outcome(outcome: &VoyageOutcome) -> ReportRow {
    let mission = &outcome.mission;
    let hydrogen = &outcome.hydrogen;
    let energy = &outcome.energy;
    let cost = &outcome.cost;
    let emissions = &outcome.emissions;

    let columns = vec![
        ("mission_distance_km".to_string(), mission.distance_km),
        ("mission_load_factor".to_string(), mission.load_factor),
        ("mission_duration_hours".to_string(), mission.duration_hours),
        (
            "hydrogen_adjusted_power_kw".to_string(),
            hydrogen.adjusted_power_kw,
        ),
        (
            "hydrogen_energy_required_kwh".to_string(),
            hydrogen.energy_required_kwh,
        ),
        ("hydrogen_efficiency".to_string(), hydrogen.efficiency),
        (
            "hydrogen_hydrogen_needed_kg".to_string(),
            hydrogen.hydrogen_needed_kg,
        ),
        (
            "energy_energy_delivered_kwh".to_string(),
            energy.energy_delivered_kwh,
        ),
        ("energy_hydrogen_used_kg".to_string(), energy.hydrogen_used_kg),
        ("cost_fuel_cost_usd".to_string(), cost.fuel_cost_usd),
        ("cost_carbon_cost_usd".to_string(), cost.carbon_cost_usd),
        ("cost_total_cost_usd".to_string(), cost.total_cost_usd),
        ("cost_cost_per_km_usd".to_string(), cost.cost_per_km_usd),
        (
            "cost_cost_per_ton_km_usd".to_string(),
            cost.cost_per_ton_km_usd,
        ),
        (
            "emissions_total_emissions_kg_co2e".to_string(),
            emissions.total_emissions_kg_co2e,
        ),
        (
            "emissions_emissions_per_km_kg_co2e".to_string(),
            emissions.emissions_per_km_kg_co2e,
        ),
        (
            "emissions_emissions_per_ton_km_kg_co2e".to_string(),
            emissions.emissions_per_ton_km_kg_co2e,
        ),
    ];

    ReportRow {
        engine: outcome.hydrogen.engine_type.label().to_string(),
        columns,
    }
}

/// Serialize a full outcome tree as pretty JSON for programmatic consumers.
pub fn outcome_to_json(outcome: &VoyageOutcome) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_pipeline::run_pipeline;
    use hv_scenario::{EngineType, VesselType, VoyageScenario};

    fn outcome() -> VoyageOutcome {
        let mut s = VoyageScenario::for_vessel(EngineType::FuelCell, VesselType::RoRo, 400.0);
        s.emission_factor_kg_co2e_per_kg_h2 = 10.0;
        s.carbon_price_usd_per_ton = 100.0;
        run_pipeline(&s).unwrap()
    }

    #[test]
    fn row_carries_engine_label_and_all_columns() {
        let outcome = outcome();
        let row = flatten_outcome(&outcome);
        assert_eq!(row.engine, "PEMFC");
        assert_eq!(row.columns.len(), 17);
        assert_eq!(
            row.column("cost_total_cost_usd"),
            Some(outcome.cost.total_cost_usd)
        );
        assert_eq!(
            row.column("emissions_emissions_per_km_kg_co2e"),
            Some(outcome.emissions.emissions_per_km_kg_co2e)
        );
        assert_eq!(row.column("no_such_column"), None);
    }

    #[test]
    fn header_is_stage_ordered() {
        let row = flatten_outcome(&outcome());
        let header = row.header();
        assert_eq!(header.first(), Some(&"mission_distance_km"));
        assert!(header.iter().position(|c| c.starts_with("cost_")).unwrap()
            > header.iter().position(|c| c.starts_with("hydrogen_")).unwrap());
    }

    #[test]
    fn outcome_serializes_to_json() {
        let text = outcome_to_json(&outcome()).unwrap();
        assert!(text.contains("\"total_cost_usd\""));
        assert!(text.contains("\"PEMFC\""));
    }
}
