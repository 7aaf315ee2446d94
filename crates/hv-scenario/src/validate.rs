//! Scenario validation logic.
//!
//! Runs before the pipeline so that divide-by-zero configurations are refused
//! up front instead of surfacing as infinite unit costs. The distance/mass
//! rule applies to every evaluation path, single-engine and comparison alike.

use crate::schema::VoyageScenario;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported engine type: {value:?}")]
    UnsupportedEngineType { value: String },

    #[error("Invalid distance or mass: {field} = {value} (must be > 0)")]
    InvalidDistanceOrMass { field: &'static str, value: f64 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub fn validate_scenario(scenario: &VoyageScenario) -> Result<(), ValidationError> {
    require_positive("route_km", scenario.route_km)?;
    require_positive("cargo_mass_tons", scenario.cargo_mass_tons)?;

    if !(scenario.load_factor > 0.0 && scenario.load_factor <= 1.0) {
        return Err(ValidationError::InvalidValue {
            field: "load_factor",
            value: scenario.load_factor,
            reason: "must be in (0, 1]",
        });
    }

    require_non_negative("fuel_cost_usd_per_kg", scenario.fuel_cost_usd_per_kg)?;
    require_non_negative(
        "emission_factor_kg_co2e_per_kg_h2",
        scenario.emission_factor_kg_co2e_per_kg_h2,
    )?;
    require_non_negative("carbon_price_usd_per_ton", scenario.carbon_price_usd_per_ton)?;

    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // NaN fails the comparison and lands here too.
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidDistanceOrMass { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be non-negative and finite",
        })
    }
}
