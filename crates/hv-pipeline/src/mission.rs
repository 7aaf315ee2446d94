//! Mission profile stage.

use hv_core::units::{km, kmh};
use hv_scenario::VoyageScenario;
use serde::{Deserialize, Serialize};

/// Assumed average transit speed over the route, km/h.
///
/// Engineering assumption shared by every scenario until a vessel-specific
/// speed model exists. Duration scales linearly with distance because of it.
pub const CRUISE_SPEED_KMH: f64 = 30.0;

/// Voyage-level parameters derived from the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionProfile {
    pub distance_km: f64,
    pub load_factor: f64,
    pub duration_hours: f64,
}

/// Derive the mission profile for one voyage.
///
/// No failure conditions: the only divisor is the fixed cruise speed.
pub fn plan(scenario: &VoyageScenario) -> MissionProfile {
    use uom::si::time::hour;

    let transit = km(scenario.route_km) / kmh(CRUISE_SPEED_KMH);

    MissionProfile {
        distance_km: scenario.route_km,
        load_factor: scenario.load_factor,
        duration_hours: transit.get::<hour>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_core::numeric::{nearly_equal, Tolerances};
    use hv_scenario::{EngineType, VesselType};

    fn scenario(route_km: f64) -> VoyageScenario {
        let mut s = VoyageScenario::for_vessel(EngineType::FuelCell, VesselType::RoRo, route_km);
        s.load_factor = 0.8;
        s
    }

    #[test]
    fn duration_is_distance_over_cruise_speed() {
        let profile = plan(&scenario(400.0));
        assert!(nearly_equal(
            profile.duration_hours,
            400.0 / CRUISE_SPEED_KMH,
            Tolerances::default()
        ));
    }

    #[test]
    fn distance_and_load_pass_through() {
        let profile = plan(&scenario(1234.5));
        assert_eq!(profile.distance_km, 1234.5);
        assert_eq!(profile.load_factor, 0.8);
    }
}
