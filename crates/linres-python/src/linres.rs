use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{checked_slice, contiguous_slice, value_error};
use linres_core::linres::constants::{N_PARAMS, STATE_SIZE};
use linres_core::linres::params::Parameters;
use linres_core::linres::processes::runoff_fraction;
use linres_core::linres::run;
use linres_core::linres::state::State;
use linres_core::traits::{ModelParams, ModelState};

define_timeseries_result! {
    /// Linear reservoir run results with typed numpy array attributes.
    pub struct LinresResult from linres_core::linres::fluxes::FluxesTimeseries {
        precip, streamflow, storage,
    }
}

fn parse_params(params: &PyReadonlyArray1<'_, f64>) -> PyResult<Parameters> {
    let p_slice = checked_slice(params, N_PARAMS, "params")?;
    Parameters::from_array(p_slice).map_err(value_error)
}

/// Run over a precipitation series; returns a dict of numpy arrays.
#[pyfunction]
#[pyo3(signature = (params, precip, initial_state=0.0))]
fn linres_run<'py>(
    py: Python<'py>,
    params: PyReadonlyArray1<'py, f64>,
    precip: PyReadonlyArray1<'py, f64>,
    initial_state: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let p = parse_params(&params)?;
    let precip_slice = contiguous_slice(&precip)?;

    let result = run::run(&p, precip_slice, initial_state);

    let dict = timeseries_to_dict!(py, result, precip, streamflow, storage);
    Ok(dict)
}

/// Run with a scalar `k`, rejecting values outside the calibration bounds.
#[pyfunction]
#[pyo3(signature = (precip, k, initial_state=0.0))]
fn linres_simulate(
    py: Python<'_>,
    precip: PyReadonlyArray1<'_, f64>,
    k: f64,
    initial_state: f64,
) -> PyResult<LinresResult> {
    let p = Parameters::checked(k).map_err(value_error)?;
    let precip_slice = contiguous_slice(&precip)?;
    let result = run::run(&p, precip_slice, initial_state);
    Ok(LinresResult::from_timeseries(py, result))
}

/// Advance one timestep from `state = [storage, streamflow]`.
#[pyfunction]
fn linres_step<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyDict>)> {
    let p = parse_params(&params)?;
    let s_slice = checked_slice(&state, STATE_SIZE, "state")?;
    let s = State::from_slice(s_slice).map_err(value_error)?;

    let (new_state, fluxes) = run::step(&s, &p, precip, runoff_fraction(p.k));

    let state_arr = PyArray1::from_vec(py, new_state.to_vec());
    let dict = fluxes_to_dict!(py, fluxes, precip, streamflow, storage);
    Ok((state_arr, dict))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "linres")?;
    m.add_function(wrap_pyfunction!(linres_run, &m)?)?;
    m.add_function(wrap_pyfunction!(linres_simulate, &m)?)?;
    m.add_function(wrap_pyfunction!(linres_step, &m)?)?;
    m.add_class::<LinresResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
