// kc-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, Mass as UomMass,
    MassRate as UomMassRate, Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type MassRate = UomMassRate;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn kmh(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

/// Fixed conversion factors of the vehicle model.
///
/// The scalar updaters work in km/h, m/s², s, km, kg and kg/s and use these
/// factors directly so results are exact for round inputs.
pub mod constants {
    /// Seconds in one hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;

    /// 1 m/s² expressed as velocity gain per hour: 3600² / 1000 km/h².
    pub const KMH_PER_HOUR_PER_MPS2: f64 = 12_960.0;

    #[inline]
    pub fn seconds_to_hours(time_s: f64) -> f64 {
        time_s / SECONDS_PER_HOUR
    }

    #[inline]
    pub fn mps2_to_kmh_per_hour(accel_mps2: f64) -> f64 {
        accel_mps2 * KMH_PER_HOUR_PER_MPS2
    }
}

#[cfg(test)]
mod tests {
    use super::constants::*;
    use super::*;
    use uom::si::acceleration::meter_per_second_squared;
    use uom::si::velocity::kilometer_per_hour;

    #[test]
    fn constructors_smoke() {
        let _v = kmh(10_000.0);
        let _a = mps2(3.0);
        let _t = s(3_600.0);
        let _d = km(0.0);
        let _m = kg(5_000.0);
        let _mdot = kgps(0.5);
    }

    #[test]
    fn acceleration_factor_matches_uom() {
        // One m/s² sustained for one hour adds 12 960 km/h.
        let gained = mps2(1.0) * s(SECONDS_PER_HOUR);
        let gained_kmh = gained.get::<kilometer_per_hour>();
        assert!((gained_kmh - KMH_PER_HOUR_PER_MPS2).abs() < 1e-6);
        assert_eq!(mps2(1.0).get::<meter_per_second_squared>(), 1.0);
    }

    #[test]
    fn conversion_helpers() {
        assert_eq!(seconds_to_hours(3_600.0), 1.0);
        assert_eq!(seconds_to_hours(1_800.0), 0.5);
        assert_eq!(mps2_to_kmh_per_hour(3.0), 38_880.0);
    }
}
