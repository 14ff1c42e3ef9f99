use crate::error::{Computation, KcError, KcResult};

/// Floating point type used throughout the calculator
pub type Real = f64;

/// Absolute and relative slack for comparing computed quantities.
///
/// The default is tight enough that projections with round inputs must match
/// to the last few ulps.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within either the absolute or the relative tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinite inputs, collecting every offending parameter name.
pub fn ensure_all_finite(
    computation: Computation,
    inputs: &[(&'static str, Real)],
) -> KcResult<()> {
    let params: Vec<&'static str> = inputs
        .iter()
        .filter(|(_, v)| !v.is_finite())
        .map(|(name, _)| *name)
        .collect();

    if params.is_empty() {
        Ok(())
    } else {
        Err(KcError::InvalidParameter {
            computation,
            params,
        })
    }
}

/// Reject a NaN or infinite computed value, e.g. after an intermediate overflow.
pub fn ensure_finite_result(
    computation: Computation,
    what: &'static str,
    value: Real,
) -> KcResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KcError::NonFiniteResult {
            computation,
            what,
            value,
        })
    }
}
