/// Linear reservoir parameters.
///
/// - `k`: recession constant [-], enters the recurrence through the runoff
///   fraction `1 - exp(-k)`.
use super::constants::{K_BOUNDS, N_PARAMS, PARAM_BOUNDS, PARAM_NAMES};
use crate::error::LinresError;
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    pub k: f64,
}

impl Parameters {
    /// Create new Parameters without range checks.
    ///
    /// Non-positive or non-finite `k` still runs; the output is then
    /// numerically valid but physically meaningless.
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Create new Parameters, rejecting `k` outside `K_BOUNDS`.
    pub fn checked(k: f64) -> Result<Self, LinresError> {
        if !K_BOUNDS.contains(k) {
            return Err(LinresError::ParameterOutOfBounds {
                name: "k",
                value: k,
                min: K_BOUNDS.min,
                max: K_BOUNDS.max,
            });
        }
        Ok(Self { k })
    }

    /// Per-timestep decay factor `exp(-k)`.
    pub fn decay_factor(&self) -> f64 {
        (-self.k).exp()
    }

    /// Whether `exp(-k)` lies strictly inside (0, 1).
    pub fn is_physical(&self) -> bool {
        let d = self.decay_factor();
        d > 0.0 && d < 1.0
    }
}

impl ModelParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;
    const PARAM_BOUNDS: &'static [(f64, f64)] = PARAM_BOUNDS;

    fn from_array(arr: &[f64]) -> Result<Self, LinresError> {
        match arr {
            [k] => Ok(Self::new(*k)),
            _ => Err(LinresError::WrongLength {
                what: "parameters",
                expected: N_PARAMS,
                got: arr.len(),
            }),
        }
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let p = Parameters::checked(0.5).unwrap();
        assert_eq!(p.k, 0.5);
    }

    #[test]
    fn unchecked_accepts_anything() {
        assert_eq!(Parameters::new(-3.0).k, -3.0);
        assert!(Parameters::new(f64::NAN).k.is_nan());
    }

    #[test]
    fn k_lower_bound_is_exclusive() {
        assert!(Parameters::checked(0.0).is_err());
        assert!(Parameters::checked(1e-9).is_ok());
    }

    #[test]
    fn k_upper_bound_is_inclusive() {
        assert!(Parameters::checked(1.0).is_ok());
        assert!(Parameters::checked(1.01).is_err());
    }

    #[test]
    fn k_nan_rejected() {
        assert!(Parameters::checked(f64::NAN).is_err());
    }

    #[test]
    fn decay_factor_range() {
        assert!(Parameters::new(0.5).is_physical());
        assert!(!Parameters::new(0.0).is_physical());
        assert!(!Parameters::new(-1.0).is_physical());
        assert!(!Parameters::new(f64::NAN).is_physical());
    }

    #[test]
    fn from_array_valid() {
        let p = Parameters::from_array(&[0.3]).unwrap();
        assert_eq!(p.k, 0.3);
    }

    #[test]
    fn from_array_wrong_length() {
        assert!(Parameters::from_array(&[]).is_err());
        assert!(Parameters::from_array(&[0.3, 0.4]).is_err());
    }

    #[test]
    fn to_array_roundtrip() {
        let p = Parameters::new(0.25);
        let p2 = Parameters::from_array(&p.to_array()).unwrap();
        assert_eq!(p, p2);
    }
}
