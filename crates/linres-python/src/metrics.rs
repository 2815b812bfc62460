use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, value_error};
use linres_core::metrics::Metric;

fn score(
    metric: Metric,
    observed: &PyReadonlyArray1<'_, f64>,
    simulated: &PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    metric
        .score(contiguous_slice(observed)?, contiguous_slice(simulated)?)
        .map_err(value_error)
}

/// Score by metric name (`"nse"`, `"kge"`, `"rmse"`, ...).
#[pyfunction]
fn calc(
    name: &str,
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    let metric = Metric::from_name(name).map_err(value_error)?;
    score(metric, &observed, &simulated)
}

#[pyfunction]
fn nse(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    score(Metric::Nse, &observed, &simulated)
}

#[pyfunction]
fn kge(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    score(Metric::Kge, &observed, &simulated)
}

#[pyfunction]
fn mse(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    score(Metric::Mse, &observed, &simulated)
}

#[pyfunction]
fn rmse(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    score(Metric::Rmse, &observed, &simulated)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "metrics")?;
    m.add_function(wrap_pyfunction!(calc, &m)?)?;
    m.add_function(wrap_pyfunction!(nse, &m)?)?;
    m.add_function(wrap_pyfunction!(kge, &m)?)?;
    m.add_function(wrap_pyfunction!(mse, &m)?)?;
    m.add_function(wrap_pyfunction!(rmse, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
