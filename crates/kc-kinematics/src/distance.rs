//! Distance update at constant velocity.

use kc_core::constants::seconds_to_hours;
use kc_core::units::{Length, Time, Velocity, km};
use kc_core::{Computation, KcResult, Real, ensure_all_finite, ensure_finite_result};
use uom::si::length::kilometer;
use uom::si::time::second;
use uom::si::velocity::kilometer_per_hour;

/// New distance (km) after travelling at `initial_velocity_kmh` for `time_s` seconds.
///
/// Distance accrues at the velocity observed at the start of the interval;
/// acceleration over the interval is not taken into account.
pub fn compute_new_distance(
    initial_distance_km: Real,
    initial_velocity_kmh: Real,
    time_s: Real,
) -> KcResult<Real> {
    ensure_all_finite(
        Computation::Distance,
        &[
            ("initial_distance_km", initial_distance_km),
            ("initial_velocity_kmh", initial_velocity_kmh),
            ("time_s", time_s),
        ],
    )?;

    if time_s < 0.0 {
        tracing::warn!(time_s, "negative elapsed time in distance update");
    }

    let new_distance = ensure_finite_result(
        Computation::Distance,
        "new_distance_km",
        initial_distance_km + initial_velocity_kmh * seconds_to_hours(time_s),
    )?;

    tracing::debug!(
        initial_distance_km,
        initial_velocity_kmh,
        time_s,
        new_distance,
        "distance updated"
    );
    Ok(new_distance)
}

/// Unit-aware form of [`compute_new_distance`].
pub fn new_distance(initial: Length, velocity: Velocity, elapsed: Time) -> KcResult<Length> {
    compute_new_distance(
        initial.get::<kilometer>(),
        velocity.get::<kilometer_per_hour>(),
        elapsed.get::<second>(),
    )
    .map(km)
}
