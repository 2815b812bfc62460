use linres_core::LinresError;
use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Validation failures surface in Python as `ValueError`.
pub fn value_error(e: LinresError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Borrow a numpy array as a slice, requiring C-contiguity.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Borrow a numpy array as a slice of exactly `expected_len` elements.
pub fn checked_slice<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    expected_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name,
            expected_len,
            slice.len()
        )));
    }
    Ok(slice)
}
