//! Scenario schema definitions.

use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Engine technology evaluated by the pipeline.
///
/// The set is closed. Scenario parsing rejects any other tag at the boundary
/// with [`ValidationError::UnsupportedEngineType`], so the pipeline itself
/// never sees an engine it cannot price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineType {
    /// Proton-exchange-membrane fuel cell system.
    #[serde(rename = "PEMFC", alias = "FuelCell")]
    FuelCell,
    /// Hydrogen internal-combustion engine.
    #[serde(rename = "H2-ICE", alias = "HydrogenIce")]
    HydrogenIce,
}

impl EngineType {
    pub const ALL: [EngineType; 2] = [EngineType::FuelCell, EngineType::HydrogenIce];

    /// Tank-to-shaft conversion efficiency.
    ///
    /// Fixed engineering assumptions, not scenario inputs: 0.50 for the PEM
    /// fuel cell system, 0.38 for the hydrogen ICE.
    pub fn efficiency(self) -> f64 {
        match self {
            EngineType::FuelCell => 0.50,
            EngineType::HydrogenIce => 0.38,
        }
    }

    /// Wire/display tag, matching the scenario file format.
    pub fn label(self) -> &'static str {
        match self {
            EngineType::FuelCell => "PEMFC",
            EngineType::HydrogenIce => "H2-ICE",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EngineType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PEMFC" | "FuelCell" => Ok(EngineType::FuelCell),
            "H2-ICE" | "HydrogenIce" => Ok(EngineType::HydrogenIce),
            other => Err(ValidationError::UnsupportedEngineType {
                value: other.to_string(),
            }),
        }
    }
}

/// Vessel class presets carried over from the interactive dashboard.
///
/// The pipeline does not use this yet (the rated-power model is a fixed
/// placeholder); it seeds typical cargo mass and load factor for scenario
/// authors and is kept on the scenario for future power-model refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VesselType {
    #[default]
    RoRo,
    Tanker,
    Ferry,
    #[serde(rename = "Bulk Carrier", alias = "BulkCarrier")]
    BulkCarrier,
}

impl VesselType {
    pub fn typical_cargo_mass_tons(self) -> f64 {
        match self {
            VesselType::RoRo => 3000.0,
            VesselType::Tanker => 7000.0,
            VesselType::Ferry => 1000.0,
            VesselType::BulkCarrier => 10_000.0,
        }
    }

    pub fn typical_load_factor(self) -> f64 {
        match self {
            VesselType::RoRo => 0.80,
            VesselType::Tanker => 0.85,
            VesselType::Ferry => 0.60,
            VesselType::BulkCarrier => 0.90,
        }
    }
}

/// Default hydrogen price when a scenario file omits it.
pub const DEFAULT_FUEL_COST_USD_PER_KG: f64 = 5.0;

fn default_fuel_cost_usd_per_kg() -> f64 {
    DEFAULT_FUEL_COST_USD_PER_KG
}

/// A single-voyage evaluation scenario.
///
/// Every optional field's default is declared here, once; stages never
/// re-derive fallbacks on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageScenario {
    pub engine_type: EngineType,
    /// Route length, km. Must be strictly positive.
    pub route_km: f64,
    /// Fraction of rated power drawn during transit, in (0, 1].
    pub load_factor: f64,
    /// Cargo on board, metric tons. Must be strictly positive.
    pub cargo_mass_tons: f64,
    #[serde(default = "default_fuel_cost_usd_per_kg")]
    pub fuel_cost_usd_per_kg: f64,
    #[serde(default)]
    pub emission_factor_kg_co2e_per_kg_h2: f64,
    #[serde(default)]
    pub carbon_price_usd_per_ton: f64,
    /// Reserved: organic Rankine cycle waste-heat recovery. Not yet modeled.
    #[serde(default)]
    pub enable_orc: bool,
    #[serde(default)]
    pub vessel_type: VesselType,
}

impl VoyageScenario {
    /// Scenario seeded from a vessel class preset.
    pub fn for_vessel(engine_type: EngineType, vessel_type: VesselType, route_km: f64) -> Self {
        Self {
            engine_type,
            route_km,
            load_factor: vessel_type.typical_load_factor(),
            cargo_mass_tons: vessel_type.typical_cargo_mass_tons(),
            fuel_cost_usd_per_kg: DEFAULT_FUEL_COST_USD_PER_KG,
            emission_factor_kg_co2e_per_kg_h2: 0.0,
            carbon_price_usd_per_ton: 0.0,
            enable_orc: false,
            vessel_type,
        }
    }

    /// The same scenario with a different engine fitted.
    pub fn with_engine(&self, engine_type: EngineType) -> Self {
        Self {
            engine_type,
            ..self.clone()
        }
    }
}
