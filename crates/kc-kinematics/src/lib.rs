//! kc-kinematics: velocity, distance and fuel projections for a simulated vehicle.
//!
//! Three independent updaters, each a pure function of its inputs:
//! - [`compute_new_velocity`]: constant acceleration over an interval
//! - [`compute_new_distance`]: constant (initial) velocity over an interval
//! - [`compute_remaining_fuel`]: constant burn rate over an interval
//!
//! [`project`] runs all three for a [`Scenario`] and returns a [`Projection`].
//!
//! # Example
//!
//! ```
//! use kc_kinematics::{Scenario, project};
//!
//! let projection = project(&Scenario::baseline()).unwrap();
//! assert_eq!(projection.new_velocity_kmh, 48_880.0);
//! assert_eq!(projection.new_distance_km, 10_000.0);
//! assert_eq!(projection.remaining_fuel_kg, 3_200.0);
//! ```
//!
//! Arguments are plain `f64`, so text or boolean inputs are rejected at
//! compile time:
//!
//! ```compile_fail
//! let _ = kc_kinematics::compute_new_velocity("10000", 3.0, 3600.0);
//! ```
//!
//! ```compile_fail
//! let _ = kc_kinematics::compute_remaining_fuel(5000.0, true, 3600.0);
//! ```
//!
//! NaN and infinities still type-check and are rejected at runtime:
//!
//! ```
//! use kc_core::{Computation, KcError};
//!
//! let err = kc_kinematics::compute_new_distance(0.0, f64::NAN, 3600.0).unwrap_err();
//! assert!(matches!(
//!     err,
//!     KcError::InvalidParameter { computation: Computation::Distance, .. }
//! ));
//! ```

pub mod distance;
pub mod fuel;
pub mod scenario;
pub mod velocity;

// Re-exports
pub use distance::{compute_new_distance, new_distance};
pub use fuel::{compute_remaining_fuel, remaining_fuel};
pub use scenario::{Projection, Scenario, project};
pub use velocity::{compute_new_velocity, new_velocity};
