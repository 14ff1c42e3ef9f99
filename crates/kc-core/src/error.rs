use core::fmt;

use thiserror::Error;

use crate::numeric::Real;

pub type KcResult<T> = Result<T, KcError>;

/// The three projections a scenario is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Computation {
    Velocity,
    Distance,
    Fuel,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Velocity => write!(f, "velocity"),
            Self::Distance => write!(f, "distance"),
            Self::Fuel => write!(f, "fuel"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KcError {
    #[error(
        "Invalid parameters for {computation} computation: {} must be finite numbers",
        .params.join(", ")
    )]
    InvalidParameter {
        computation: Computation,
        params: Vec<&'static str>,
    },

    #[error(
        "Fuel cannot be negative: burning {burned_kg} kg exceeds the {available_kg} kg available \
         (short by {} kg); check fuel burn rate and time",
        .burned_kg - .available_kg
    )]
    FuelExhaustion { available_kg: Real, burned_kg: Real },

    #[error("Non-finite {what} from {computation} computation: {value}")]
    NonFiniteResult {
        computation: Computation,
        what: &'static str,
        value: Real,
    },
}

impl KcError {
    /// Which computation raised this error.
    pub fn computation(&self) -> Computation {
        match self {
            Self::InvalidParameter { computation, .. } => *computation,
            Self::FuelExhaustion { .. } => Computation::Fuel,
            Self::NonFiniteResult { computation, .. } => *computation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_names_every_param() {
        let err = KcError::InvalidParameter {
            computation: Computation::Distance,
            params: vec!["initial_distance_km", "time_s"],
        };
        let msg = err.to_string();
        assert!(msg.contains("distance computation"));
        assert!(msg.contains("initial_distance_km, time_s"));
        assert_eq!(err.computation(), Computation::Distance);
    }

    #[test]
    fn fuel_exhaustion_reports_shortfall() {
        let err = KcError::FuelExhaustion {
            available_kg: 100.0,
            burned_kg: 200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Fuel cannot be negative"));
        assert!(msg.contains("short by 100 kg"));
        assert_eq!(err.computation(), Computation::Fuel);
    }

    #[test]
    fn non_finite_result_names_quantity() {
        let err = KcError::NonFiniteResult {
            computation: Computation::Velocity,
            what: "new_velocity_kmh",
            value: Real::INFINITY,
        };
        let msg = err.to_string();
        assert!(msg.contains("new_velocity_kmh"));
        assert!(msg.contains("velocity computation"));
        assert_eq!(err.computation(), Computation::Velocity);
    }
}
