//! kc-core: shared foundation for the kinematics calculator.
//!
//! Contains:
//! - units (uom SI types, constructors and the fixed model conversion factors)
//! - numeric (Real + tolerances + finiteness checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports for downstream crates
pub use error::{Computation, KcError, KcResult};
pub use numeric::*;
pub use units::*;
