//! Fuel consumption at a constant burn rate.

use kc_core::units::{Mass, MassRate, Time, kg};
use kc_core::{Computation, KcError, KcResult, Real, ensure_all_finite, ensure_finite_result};
use uom::si::mass::kilogram;
use uom::si::mass_rate::kilogram_per_second;
use uom::si::time::second;

/// Fuel (kg) left after burning at `fuel_burn_rate_kgps` for `time_s` seconds.
///
/// Fails with [`KcError::FuelExhaustion`] when more fuel would be burned than
/// is available. The result is never clamped; exactly zero is valid.
pub fn compute_remaining_fuel(
    initial_fuel_kg: Real,
    fuel_burn_rate_kgps: Real,
    time_s: Real,
) -> KcResult<Real> {
    ensure_all_finite(
        Computation::Fuel,
        &[
            ("initial_fuel_kg", initial_fuel_kg),
            ("fuel_burn_rate_kgps", fuel_burn_rate_kgps),
            ("time_s", time_s),
        ],
    )?;

    if time_s < 0.0 {
        tracing::warn!(time_s, "negative elapsed time in fuel update");
    }

    let burned_kg = fuel_burn_rate_kgps * time_s;
    let remaining = initial_fuel_kg - burned_kg;
    if remaining < 0.0 {
        return Err(KcError::FuelExhaustion {
            available_kg: initial_fuel_kg,
            burned_kg,
        });
    }
    let remaining = ensure_finite_result(Computation::Fuel, "remaining_fuel_kg", remaining)?;

    tracing::debug!(initial_fuel_kg, burned_kg, remaining, "fuel updated");
    Ok(remaining)
}

/// Unit-aware form of [`compute_remaining_fuel`].
pub fn remaining_fuel(initial: Mass, burn_rate: MassRate, elapsed: Time) -> KcResult<Mass> {
    compute_remaining_fuel(
        initial.get::<kilogram>(),
        burn_rate.get::<kilogram_per_second>(),
        elapsed.get::<second>(),
    )
    .map(kg)
}
