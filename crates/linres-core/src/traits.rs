use crate::error::LinresError;

/// Interface shared by lumped rainfall-runoff models.
///
/// A model prepares run-constant context from its parameters, builds an
/// initial state, and advances that state one timestep at a time.
pub trait HydrologicalModel {
    const NAME: &'static str;
    type Params;
    type State: Clone;
    type Forcing: Copy;
    type Fluxes;
    type FluxesTimeseries: FluxesTimeseriesOps<Self::Fluxes>;
    /// Values derived from params once per run.
    type Context;

    fn prepare(params: &Self::Params) -> Self::Context;

    fn initialize_state(params: &Self::Params) -> Self::State;

    /// Advance one timestep without touching the input state.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
        context: &Self::Context,
    ) -> (Self::State, Self::Fluxes);

    /// Run over a forcing timeseries in strict timestep order.
    ///
    /// Each model decides how its first timestep relates to `initial_state`.
    fn run(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> Self::FluxesTimeseries;
}

/// Parameter records that can be flattened for calibration harnesses.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];
    /// (min, max) per parameter, in `PARAM_NAMES` order.
    const PARAM_BOUNDS: &'static [(f64, f64)];

    fn from_array(arr: &[f64]) -> Result<Self, LinresError>;
    fn to_array(&self) -> Vec<f64>;
}

/// State records with a flat array representation.
pub trait ModelState: Sized {
    fn to_vec(&self) -> Vec<f64>;
    fn from_slice(arr: &[f64]) -> Result<Self, LinresError>;
    fn array_len(&self) -> usize;
}

/// Operations required on the timeseries collection type.
pub trait FluxesTimeseriesOps<F> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, f: &F);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}
