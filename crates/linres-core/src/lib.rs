//! linres — linear reservoir rainfall-runoff model.
//!
//! Converts a precipitation (net inflow) series into simulated streamflow and
//! a storage trajectory with a single sequential pass of the closed-form
//! linear reservoir recurrence.
pub mod error;
pub mod forcing;
pub mod linres;
pub mod metrics;
pub mod traits;

pub use error::LinresError;
pub use linres::params::Parameters;
pub use linres::run::{simulate, simulate_many, LinearReservoir, Simulation};
