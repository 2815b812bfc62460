/// Generate a frozen `#[pyclass]` whose fields are numpy arrays, plus a
/// `from_timeseries()` constructor consuming the core timeseries struct.
macro_rules! define_timeseries_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
        }

        impl $name {
            pub fn from_timeseries(py: pyo3::Python<'_>, ts: $core_type) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, ts.$field).unbind(),
                    )+
                }
            }
        }
    };
}

/// Move the named `Vec<f64>` columns of a timeseries into a `PyDict` of arrays.
macro_rules! timeseries_to_dict {
    ($py:expr, $ts:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), numpy::PyArray1::from_vec($py, $ts.$field))?;
        )+
        dict
    }};
}

/// Copy the named scalar fields of a single-timestep record into a `PyDict`.
macro_rules! fluxes_to_dict {
    ($py:expr, $f:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), $f.$field)?;
        )+
        dict
    }};
}
