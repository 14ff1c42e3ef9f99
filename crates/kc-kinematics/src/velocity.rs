//! Velocity update under constant acceleration.

use kc_core::constants::{mps2_to_kmh_per_hour, seconds_to_hours};
use kc_core::units::{Accel, Time, Velocity, kmh};
use kc_core::{Computation, KcResult, Real, ensure_all_finite, ensure_finite_result};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::time::second;
use uom::si::velocity::kilometer_per_hour;

/// New velocity (km/h) after accelerating for `time_s` seconds.
///
/// Acceleration is converted to km/h per hour (×12 960) and time to hours
/// (÷3 600). Negative time or acceleration is passed through unchanged, so the
/// result may drop below the initial velocity or go negative.
pub fn compute_new_velocity(
    initial_velocity_kmh: Real,
    acceleration_mps2: Real,
    time_s: Real,
) -> KcResult<Real> {
    ensure_all_finite(
        Computation::Velocity,
        &[
            ("initial_velocity_kmh", initial_velocity_kmh),
            ("acceleration_mps2", acceleration_mps2),
            ("time_s", time_s),
        ],
    )?;

    if time_s < 0.0 {
        tracing::warn!(time_s, "negative elapsed time in velocity update");
    }

    let rate_kmh_per_h = mps2_to_kmh_per_hour(acceleration_mps2);
    let new_velocity = ensure_finite_result(
        Computation::Velocity,
        "new_velocity_kmh",
        initial_velocity_kmh + rate_kmh_per_h * seconds_to_hours(time_s),
    )?;

    tracing::debug!(
        initial_velocity_kmh,
        acceleration_mps2,
        time_s,
        new_velocity,
        "velocity updated"
    );
    Ok(new_velocity)
}

/// Unit-aware form of [`compute_new_velocity`].
pub fn new_velocity(initial: Velocity, acceleration: Accel, elapsed: Time) -> KcResult<Velocity> {
    compute_new_velocity(
        initial.get::<kilometer_per_hour>(),
        acceleration.get::<meter_per_second_squared>(),
        elapsed.get::<second>(),
    )
    .map(kmh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kc_core::units::{mps2, s};
    use kc_core::{KcError, Tolerances, nearly_equal};

    #[test]
    fn one_hour_at_three_mps2() {
        let v = compute_new_velocity(10_000.0, 3.0, 3_600.0).unwrap();
        assert_eq!(v, 48_880.0);
    }

    #[test]
    fn zero_acceleration_keeps_velocity() {
        assert_eq!(compute_new_velocity(123.4, 0.0, 999.0).unwrap(), 123.4);
    }

    #[test]
    fn deceleration_and_negative_time_pass_through() {
        let v = compute_new_velocity(100.0, -1.0, 3_600.0).unwrap();
        assert_eq!(v, 100.0 - 12_960.0);

        let v = compute_new_velocity(100.0, 1.0, -3_600.0).unwrap();
        assert_eq!(v, 100.0 - 12_960.0);
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let err = compute_new_velocity(Real::NAN, 1.0, Real::INFINITY).unwrap_err();
        assert_eq!(
            err,
            KcError::InvalidParameter {
                computation: Computation::Velocity,
                params: vec!["initial_velocity_kmh", "time_s"],
            }
        );
    }

    #[test]
    fn overflowing_rate_is_not_reported_as_success() {
        // 1e305 m/s² overflows the km/h-per-hour rate; inf * 0 h is NaN.
        let err = compute_new_velocity(0.0, 1e305, 0.0).unwrap_err();
        assert!(matches!(
            err,
            KcError::NonFiniteResult {
                computation: Computation::Velocity,
                what: "new_velocity_kmh",
                ..
            }
        ));

        let err = compute_new_velocity(0.0, 1e305, 3_600.0).unwrap_err();
        assert_eq!(err.computation(), Computation::Velocity);
    }

    #[test]
    fn typed_variant_accepts_any_unit() {
        use uom::si::time::minute;
        let elapsed = Time::new::<minute>(60.0);
        let v = new_velocity(kmh(10_000.0), mps2(3.0), elapsed).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(v.get::<kilometer_per_hour>(), 48_880.0, tol));

        let err = new_velocity(kmh(0.0), mps2(Real::NAN), s(1.0)).unwrap_err();
        assert_eq!(err.computation(), Computation::Velocity);
    }
}
