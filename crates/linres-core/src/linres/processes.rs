//! Linear reservoir process equations.
//!
//! Pure functions for one recurrence step. Operation order is fixed so
//! results are reproducible bit for bit.

/// Fraction of the store imbalance released per timestep: `1 - exp(-k)`.
#[inline]
pub fn runoff_fraction(k: f64) -> f64 {
    1.0 - (-k).exp()
}

/// Streamflow for a timestep from its precipitation and the previous storage.
///
/// `q = p - (k * p - s_prev) * runoff_fraction`
#[inline]
pub fn outflow(precip: f64, prev_storage: f64, k: f64, runoff_fraction: f64) -> f64 {
    precip - (k * precip - prev_storage) * runoff_fraction
}

/// Storage after a timestep: the change in streamflow between consecutive steps.
#[inline]
pub fn storage_update(streamflow: f64, prev_streamflow: f64) -> f64 {
    streamflow - prev_streamflow
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn runoff_fraction_known_value() {
        assert_relative_eq!(runoff_fraction(0.5), 0.393_469_340_287_366_6, epsilon = 1e-15);
    }

    #[test]
    fn runoff_fraction_zero_k() {
        assert_eq!(runoff_fraction(0.0), 0.0);
    }

    #[test]
    fn runoff_fraction_propagates_nan() {
        assert!(runoff_fraction(f64::NAN).is_nan());
    }

    #[test]
    fn outflow_without_release_is_precip() {
        // runoff fraction 0 => everything passes straight through
        assert_eq!(outflow(7.0, 3.0, 0.0, 0.0), 7.0);
    }

    #[test]
    fn outflow_known_value() {
        let f = runoff_fraction(0.5);
        let q = outflow(10.0, 2.0, 0.5, f);
        assert_relative_eq!(q, 10.0 - 3.0 * f, epsilon = 1e-12);
        assert_relative_eq!(q, 8.819_592, epsilon = 1e-6);
    }

    #[test]
    fn outflow_drains_previous_storage_without_rain() {
        let f = runoff_fraction(0.5);
        assert_relative_eq!(outflow(0.0, 4.0, 0.5, f), 4.0 * f, epsilon = 1e-12);
    }

    #[test]
    fn storage_is_streamflow_difference() {
        assert_eq!(storage_update(8.5, 2.0), 6.5);
        assert_eq!(storage_update(1.0, 3.0), -2.0);
    }
}
