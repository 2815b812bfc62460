/// Linear reservoir state carried from one timestep to the next.
///
/// - `storage`: store content at the end of the previous timestep
/// - `streamflow`: outflow of the previous timestep, needed for the storage update
use super::constants::{INITIAL_STREAMFLOW, STATE_SIZE};
use crate::error::LinresError;
use crate::traits::ModelState;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub storage: f64,
    pub streamflow: f64,
}

impl State {
    /// State before the first recurrence step.
    ///
    /// Storage is the caller's initial storage; streamflow is the timestep-0
    /// default of zero, since no earlier outflow exists.
    pub fn initialize(initial_storage: f64) -> Self {
        Self {
            storage: initial_storage,
            streamflow: INITIAL_STREAMFLOW,
        }
    }
}

impl ModelState for State {
    fn to_vec(&self) -> Vec<f64> {
        vec![self.storage, self.streamflow]
    }

    fn from_slice(arr: &[f64]) -> Result<Self, LinresError> {
        match arr {
            [storage, streamflow] => Ok(Self {
                storage: *storage,
                streamflow: *streamflow,
            }),
            _ => Err(LinresError::WrongLength {
                what: "state elements",
                expected: STATE_SIZE,
                got: arr.len(),
            }),
        }
    }

    fn array_len(&self) -> usize {
        STATE_SIZE
    }
}
