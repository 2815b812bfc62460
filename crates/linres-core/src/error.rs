use thiserror::Error;

/// Errors raised while validating inputs around a simulation.
///
/// The recurrence itself never fails; these come from the checked
/// constructors, forcing validation and metric scoring.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinresError {
    #[error("{name} series is empty")]
    EmptyInput { name: &'static str },

    #[error("{name} contains a non-finite value at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("{left} length {left_len} does not match {right} length {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("{name} = {value} is out of bounds ({min}, {max}]")]
    ParameterOutOfBounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("expected {expected} {what}, got {got}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unknown metric `{0}`")]
    UnknownMetric(String),
}
