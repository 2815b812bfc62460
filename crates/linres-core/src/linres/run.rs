/// Linear reservoir orchestration functions.
///
/// - `step()`: one recurrence step → (State, Fluxes)
/// - `run()`: a full timeseries → FluxesTimeseries
/// - `simulate()`: the `(streamflow, storage)` pair for one parameter set
/// - `simulate_many()`: independent simulations for several parameter sets
use tracing::{debug, warn};

use super::fluxes::{Fluxes, FluxesTimeseries};
use super::params::Parameters;
use super::processes;
use super::state::State;
use crate::error::LinresError;
use crate::forcing::ForcingData;
use crate::metrics::Metric;
use crate::traits::HydrologicalModel;

/// Execute one recurrence step (timestep t ≥ 1).
///
/// `runoff_fraction` is `1 - exp(-k)`, computed once per run by the caller.
/// The input state is not mutated.
pub fn step(
    state: &State,
    params: &Parameters,
    precip: f64,
    runoff_fraction: f64,
) -> (State, Fluxes) {
    let streamflow = processes::outflow(precip, state.storage, params.k, runoff_fraction);
    let storage = processes::storage_update(streamflow, state.streamflow);

    let new_state = State {
        storage,
        streamflow,
    };
    let fluxes = Fluxes {
        precip,
        streamflow,
        storage,
    };
    (new_state, fluxes)
}

/// Run the linear reservoir over a precipitation series.
///
/// Timestep 0 is pinned: its storage is `initial_state` and its streamflow
/// is zero. The recurrence runs for t = 1..T. An empty series gives an
/// empty timeseries.
pub fn run(params: &Parameters, precip: &[f64], initial_state: f64) -> FluxesTimeseries {
    run_from_state(params, precip, State::initialize(initial_state))
}

/// Run over validated forcing data.
///
/// `ForcingData::new` rejects empty series, so the output here always has
/// at least the pinned timestep 0.
pub fn run_forcing(
    params: &Parameters,
    forcing: &ForcingData,
    initial_state: f64,
) -> FluxesTimeseries {
    run(params, &forcing.precip, initial_state)
}

/// Shared run loop. `state` is reported as timestep 0.
fn run_from_state(params: &Parameters, precip: &[f64], state: State) -> FluxesTimeseries {
    let n = precip.len();
    debug!(n_timesteps = n, k = params.k, "linear reservoir run");
    if !params.is_physical() {
        warn!(
            k = params.k,
            "exp(-k) outside (0, 1): output will not be physically meaningful"
        );
    }

    let mut outputs = FluxesTimeseries::with_capacity(n);
    let Some((&first, rest)) = precip.split_first() else {
        return outputs;
    };

    outputs.push(&Fluxes {
        precip: first,
        streamflow: state.streamflow,
        storage: state.storage,
    });

    let fraction = processes::runoff_fraction(params.k);
    let mut state = state;
    for &p in rest {
        let (new_state, fluxes) = step(&state, params, p, fraction);
        outputs.push(&fluxes);
        state = new_state;
    }

    outputs
}

/// Simulate streamflow and storage for one parameter set.
///
/// Returns `(streamflow, storage)`, both as long as `precip`.
pub fn simulate(precip: &[f64], initial_state: f64, params: &Parameters) -> (Vec<f64>, Vec<f64>) {
    run(params, precip, initial_state).into_outputs()
}

/// Output of one simulation, tagged with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub params: Parameters,
    pub streamflow: Vec<f64>,
    pub storage: Vec<f64>,
}

impl Simulation {
    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.streamflow.len()
    }

    /// Returns `true` if there are no timesteps.
    pub fn is_empty(&self) -> bool {
        self.streamflow.is_empty()
    }

    /// Score the simulated streamflow against observations.
    pub fn score(&self, metric: Metric, observed: &[f64]) -> Result<f64, LinresError> {
        metric.score(observed, &self.streamflow)
    }
}

/// Simulate every parameter set independently over the same forcing.
///
/// Each simulation owns its output buffers; results come back in the order
/// of `params`.
pub fn simulate_many(
    precip: &[f64],
    initial_state: f64,
    params: &[Parameters],
) -> Vec<Simulation> {
    debug!(n_sets = params.len(), "simulating parameter sets");
    params
        .iter()
        .map(|p| {
            let (streamflow, storage) = simulate(precip, initial_state, p);
            Simulation {
                params: *p,
                streamflow,
                storage,
            }
        })
        .collect()
}

/// Precomputed context: the runoff fraction `1 - exp(-k)`.
#[derive(Debug, Clone, Copy)]
pub struct LinresContext {
    pub runoff_fraction: f64,
}

/// Marker type for the `HydrologicalModel` implementation.
pub struct LinearReservoir;

impl HydrologicalModel for LinearReservoir {
    const NAME: &'static str = "LinearReservoir";
    type Params = Parameters;
    type State = State;
    type Forcing = f64;
    type Fluxes = Fluxes;
    type FluxesTimeseries = FluxesTimeseries;
    type Context = LinresContext;

    fn prepare(params: &Self::Params) -> Self::Context {
        LinresContext {
            runoff_fraction: processes::runoff_fraction(params.k),
        }
    }

    fn initialize_state(_params: &Self::Params) -> Self::State {
        State::initialize(0.0)
    }

    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
        context: &Self::Context,
    ) -> (Self::State, Self::Fluxes) {
        step(state, params, *forcing, context.runoff_fraction)
    }

    /// Timestep 0 reports the initial state; `step` runs from t = 1.
    fn run(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> Self::FluxesTimeseries {
        let state = match initial_state {
            Some(s) => *s,
            None => Self::initialize_state(params),
        };
        run_from_state(params, forcing, state)
    }
}
