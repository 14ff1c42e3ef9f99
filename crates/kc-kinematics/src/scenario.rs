//! Scenario inputs and the one-shot projection driver.

use core::fmt;

use kc_core::{KcResult, Real};

use crate::distance::compute_new_distance;
use crate::fuel::compute_remaining_fuel;
use crate::velocity::compute_new_velocity;

/// The six inputs of one projection run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub initial_velocity_kmh: Real,
    pub acceleration_mps2: Real,
    pub time_s: Real,
    pub initial_distance_km: Real,
    pub initial_fuel_kg: Real,
    pub fuel_burn_rate_kgps: Real,
}

impl Scenario {
    /// The compiled-in vehicle scenario: one hour at 3 m/s² from 10 000 km/h.
    pub const fn baseline() -> Self {
        Self {
            initial_velocity_kmh: 10_000.0,
            acceleration_mps2: 3.0,
            time_s: 3_600.0,
            initial_distance_km: 0.0,
            initial_fuel_kg: 5_000.0,
            fuel_burn_rate_kgps: 0.5,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::baseline()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial Velocity: {} km/h", self.initial_velocity_kmh)?;
        writeln!(f, "Acceleration: {} m/s^2", self.acceleration_mps2)?;
        writeln!(f, "Time: {} s", self.time_s)?;
        writeln!(f, "Initial Distance: {} km", self.initial_distance_km)?;
        writeln!(f, "Initial Fuel: {} kg", self.initial_fuel_kg)?;
        write!(f, "Fuel Burn Rate: {} kg/s", self.fuel_burn_rate_kgps)
    }
}

/// Results of one run. Only ever built when all three updaters succeed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub new_velocity_kmh: Real,
    pub new_distance_km: Real,
    pub remaining_fuel_kg: Real,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New Velocity: {} km/h", self.new_velocity_kmh)?;
        writeln!(f, "New Distance: {} km", self.new_distance_km)?;
        write!(f, "Remaining Fuel: {} kg", self.remaining_fuel_kg)
    }
}

/// Run all three updaters against `scenario`.
///
/// Stops at the first failing computation.
pub fn project(scenario: &Scenario) -> KcResult<Projection> {
    let _span = tracing::debug_span!("project").entered();

    let new_velocity_kmh = compute_new_velocity(
        scenario.initial_velocity_kmh,
        scenario.acceleration_mps2,
        scenario.time_s,
    )?;
    let new_distance_km = compute_new_distance(
        scenario.initial_distance_km,
        scenario.initial_velocity_kmh,
        scenario.time_s,
    )?;
    let remaining_fuel_kg = compute_remaining_fuel(
        scenario.initial_fuel_kg,
        scenario.fuel_burn_rate_kgps,
        scenario.time_s,
    )?;

    Ok(Projection {
        new_velocity_kmh,
        new_distance_km,
        remaining_fuel_kg,
    })
}
