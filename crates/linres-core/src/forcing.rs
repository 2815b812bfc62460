/// Forcing data shared by the harness-facing entry points.
///
/// The core recurrence accepts any slice; `ForcingData` is the validated
/// wrapper a calling harness builds before handing a series over.
use crate::error::LinresError;

/// Temporal resolution of forcing data, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    Hourly,
    Daily,
    Monthly,
    Annual,
}

impl Resolution {
    /// Average number of days per timestep.
    pub fn days_per_timestep(self) -> f64 {
        match self {
            Resolution::Hourly => 1.0 / 24.0,
            Resolution::Daily => 1.0,
            Resolution::Monthly => 30.4375,
            Resolution::Annual => 365.25,
        }
    }
}

/// Validated precipitation forcing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcingData {
    pub precip: Vec<f64>,
    pub resolution: Resolution,
}

impl ForcingData {
    /// Create new ForcingData, rejecting empty series and NaN/infinite values.
    ///
    /// The core `run` and `simulate` return empty outputs for an empty
    /// series. This wrapper is stricter: an empty series is a
    /// [`LinresError::EmptyInput`], so anything built from a `ForcingData`
    /// always has at least one timestep.
    pub fn new(precip: Vec<f64>, resolution: Resolution) -> Result<Self, LinresError> {
        if precip.is_empty() {
            return Err(LinresError::EmptyInput { name: "precip" });
        }
        if let Some(index) = precip.iter().position(|v| !v.is_finite()) {
            return Err(LinresError::NonFinite {
                name: "precip",
                index,
            });
        }
        Ok(Self { precip, resolution })
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.precip.len()
    }

    /// Returns `true` if there are no timesteps.
    pub fn is_empty(&self) -> bool {
        self.precip.is_empty()
    }

    /// Time span covered by the series, in days.
    pub fn duration_days(&self) -> f64 {
        self.len() as f64 * self.resolution.days_per_timestep()
    }
}
