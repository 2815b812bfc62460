//! Goodness-of-fit scores for simulated against observed streamflow.
//!
//! The free functions take equal-length, non-empty slices. [`Metric::score`]
//! checks those preconditions first and is what harness code should call.
//! Standard deviations are population (not sample) deviations.

use std::fmt;
use std::str::FromStr;

use crate::error::LinresError;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

fn sum_squared_error(observed: &[f64], simulated: &[f64]) -> f64 {
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum()
}

/// Mean Squared Error. Range: [0, inf), 0 = perfect.
pub fn mse(observed: &[f64], simulated: &[f64]) -> f64 {
    sum_squared_error(observed, simulated) / observed.len() as f64
}

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
pub fn rmse(observed: &[f64], simulated: &[f64]) -> f64 {
    mse(observed, simulated).sqrt()
}

/// Mean Absolute Error. Range: [0, inf), 0 = perfect.
pub fn mae(observed: &[f64], simulated: &[f64]) -> f64 {
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).abs())
        .sum::<f64>()
        / observed.len() as f64
}

/// Nash-Sutcliffe Efficiency. Range: (-inf, 1], 1 = perfect.
///
/// Constant observations give `-inf`.
pub fn nse(observed: &[f64], simulated: &[f64]) -> f64 {
    let mean_obs = mean(observed);
    let denominator: f64 = observed.iter().map(|o| (o - mean_obs).powi(2)).sum();
    if denominator == 0.0 {
        return f64::NEG_INFINITY;
    }
    1.0 - sum_squared_error(observed, simulated) / denominator
}

/// Variability term of the NSE decomposition: `std(sim) / std(obs)`.
///
/// Undefined for constant observations, which give NaN.
pub fn alpha_nse(observed: &[f64], simulated: &[f64]) -> f64 {
    let std_obs = std_dev(observed, mean(observed));
    if std_obs == 0.0 {
        return f64::NAN;
    }
    std_dev(simulated, mean(simulated)) / std_obs
}

/// Bias term of the NSE decomposition: `(mean(sim) - mean(obs)) / std(obs)`.
///
/// Undefined for constant observations, which give NaN.
pub fn beta_nse(observed: &[f64], simulated: &[f64]) -> f64 {
    let mean_obs = mean(observed);
    let std_obs = std_dev(observed, mean_obs);
    if std_obs == 0.0 {
        return f64::NAN;
    }
    (mean(simulated) - mean_obs) / std_obs
}

/// Pearson correlation coefficient. Zero if either series is constant.
pub fn pearson_r(observed: &[f64], simulated: &[f64]) -> f64 {
    let mean_o = mean(observed);
    let mean_s = mean(simulated);
    let std_o = std_dev(observed, mean_o);
    let std_s = std_dev(simulated, mean_s);
    if std_o == 0.0 || std_s == 0.0 {
        return 0.0;
    }
    let covariance = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - mean_o) * (s - mean_s))
        .sum::<f64>()
        / observed.len() as f64;
    covariance / (std_o * std_s)
}

/// Kling-Gupta Efficiency. Range: (-inf, 1], 1 = perfect.
///
/// Degenerate ratios (zero observed deviation or mean) count as zero.
pub fn kge(observed: &[f64], simulated: &[f64]) -> f64 {
    let mean_o = mean(observed);
    let mean_s = mean(simulated);
    let std_o = std_dev(observed, mean_o);
    let std_s = std_dev(simulated, mean_s);

    let r = pearson_r(observed, simulated);
    let alpha = if std_o == 0.0 { 0.0 } else { std_s / std_o };
    let beta = if mean_o == 0.0 { 0.0 } else { mean_s / mean_o };

    1.0 - ((r - 1.0).powi(2) + (alpha - 1.0).powi(2) + (beta - 1.0).powi(2)).sqrt()
}

/// Percent Bias. Optimal = 0, positive = overestimation.
///
/// A zero observed total gives `+inf`.
pub fn pbias(observed: &[f64], simulated: &[f64]) -> f64 {
    let sum_obs: f64 = observed.iter().sum();
    if sum_obs == 0.0 {
        return f64::INFINITY;
    }
    let diff: f64 = simulated.iter().zip(observed).map(|(s, o)| s - o).sum();
    100.0 * diff / sum_obs
}

/// Named goodness-of-fit metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Mse,
    Rmse,
    Mae,
    Nse,
    AlphaNse,
    BetaNse,
    PearsonR,
    Kge,
    Pbias,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Mse,
        Metric::Rmse,
        Metric::Mae,
        Metric::Nse,
        Metric::AlphaNse,
        Metric::BetaNse,
        Metric::PearsonR,
        Metric::Kge,
        Metric::Pbias,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Mse => "mse",
            Metric::Rmse => "rmse",
            Metric::Mae => "mae",
            Metric::Nse => "nse",
            Metric::AlphaNse => "alpha_nse",
            Metric::BetaNse => "beta_nse",
            Metric::PearsonR => "r",
            Metric::Kge => "kge",
            Metric::Pbias => "pbias",
        }
    }

    /// Look up a metric by its `name()`.
    pub fn from_name(name: &str) -> Result<Self, LinresError> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| LinresError::UnknownMetric(name.to_string()))
    }

    /// Score `simulated` against `observed` after checking both are
    /// non-empty and of equal length.
    pub fn score(self, observed: &[f64], simulated: &[f64]) -> Result<f64, LinresError> {
        if observed.is_empty() {
            return Err(LinresError::EmptyInput { name: "observed" });
        }
        if observed.len() != simulated.len() {
            return Err(LinresError::LengthMismatch {
                left: "observed",
                left_len: observed.len(),
                right: "simulated",
                right_len: simulated.len(),
            });
        }
        let f: fn(&[f64], &[f64]) -> f64 = match self {
            Metric::Mse => mse,
            Metric::Rmse => rmse,
            Metric::Mae => mae,
            Metric::Nse => nse,
            Metric::AlphaNse => alpha_nse,
            Metric::BetaNse => beta_nse,
            Metric::PearsonR => pearson_r,
            Metric::Kge => kge,
            Metric::Pbias => pbias,
        };
        Ok(f(observed, simulated))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = LinresError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
