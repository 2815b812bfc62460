/// Linear reservoir constants and model contract.

// -- Model contract constants --

/// Parameter names in order.
pub const PARAM_NAMES: &[&str] = &["k"];

/// Number of parameters.
pub const N_PARAMS: usize = 1;

/// Number of elements in the flat state representation (storage, streamflow).
pub const STATE_SIZE: usize = 2;

/// Streamflow assigned to timestep 0, which has no predecessor.
pub const INITIAL_STREAMFLOW: f64 = 0.0;

// -- Parameter bounds --

/// Calibration bounds: `min` is exclusive, `max` inclusive.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value <= self.max
    }
}

/// Recession constant [-].
pub const K_BOUNDS: Bounds = Bounds { min: 0.0, max: 1.0 };

/// Parameter bounds as (min, max) tuples, in PARAM_NAMES order.
pub const PARAM_BOUNDS: &[(f64, f64)] = &[(K_BOUNDS.min, K_BOUNDS.max)];
