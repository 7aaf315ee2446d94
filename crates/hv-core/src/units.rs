// hv-core/src/units.rs

use uom::si::f64::{
    AvailableEnergy as UomAvailableEnergy, Energy as UomEnergy, Length as UomLength,
    Mass as UomMass, Power as UomPower, Ratio as UomRatio, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Distance = UomLength;
pub type Duration = UomTime;
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type SpecEnergy = UomAvailableEnergy;
pub type Velocity = UomVelocity;

#[inline]
pub fn km(v: f64) -> Distance {
    use uom::si::length::kilometer;
    Distance::new::<kilometer>(v)
}

#[inline]
pub fn hr(v: f64) -> Duration {
    use uom::si::time::hour;
    Duration::new::<hour>(v)
}

#[inline]
pub fn kmh(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn kwh(v: f64) -> Energy {
    use uom::si::energy::kilowatt_hour;
    Energy::new::<kilowatt_hour>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Specific energy given in kWh/kg (uom has no such named unit).
#[inline]
pub fn kwh_per_kg(v: f64) -> SpecEnergy {
    use uom::si::available_energy::joule_per_kilogram;
    SpecEnergy::new::<joule_per_kilogram>(v * constants::J_PER_KWH)
}

pub mod constants {
    use super::*;

    /// Joules per kilowatt-hour.
    pub const J_PER_KWH: f64 = 3.6e6;

    /// Lower heating value of hydrogen, kWh per kg of fuel.
    pub const H2_LHV_KWH_PER_KG: f64 = 33.33;

    #[inline]
    pub fn h2_lhv() -> SpecEnergy {
        kwh_per_kg(H2_LHV_KWH_PER_KG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{nearly_equal, Tolerances};

    #[test]
    fn constructors_smoke() {
        let _d = km(400.0);
        let _t = hr(13.0);
        let _v = kmh(30.0);
        let _p = kw(1500.0);
        let _e = kwh(16_000.0);
        let _m = kg(960.0);
        let _r = unitless(0.8);
        let _lhv = constants::h2_lhv();
    }

    #[test]
    fn kwh_round_trips_through_joules() {
        use uom::si::energy::{joule, kilowatt_hour};
        let e = kwh(1.0);
        assert_eq!(e.get::<joule>(), constants::J_PER_KWH);
        assert!(nearly_equal(e.get::<kilowatt_hour>(), 1.0, Tolerances::default()));
    }

    #[test]
    fn lhv_converts_energy_to_fuel_mass() {
        use uom::si::mass::kilogram;
        // 33.33 kWh burns one kilogram of hydrogen at unit efficiency.
        let mass = kwh(constants::H2_LHV_KWH_PER_KG) / constants::h2_lhv();
        assert!(nearly_equal(mass.get::<kilogram>(), 1.0, Tolerances::default()));
    }

    #[test]
    fn distance_over_speed_is_transit_time() {
        use uom::si::time::hour;
        let t = km(400.0) / kmh(30.0);
        assert!(nearly_equal(t.get::<hour>(), 400.0 / 30.0, Tolerances::default()));
    }
}
