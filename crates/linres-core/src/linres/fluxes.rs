/// Linear reservoir flux outputs.
///
/// `Fluxes` holds one timestep; the derived `FluxesTimeseries` holds the
/// full simulation column-wise.
use linres_macros::Fluxes;

use crate::traits::FluxesTimeseriesOps;

#[derive(Debug, Clone, Copy, PartialEq, Fluxes)]
pub struct Fluxes {
    pub precip: f64,     // inflow of the timestep
    pub streamflow: f64, // simulated outflow Q
    pub storage: f64,    // store content S after the timestep
}

impl FluxesTimeseriesOps<Fluxes> for FluxesTimeseries {
    fn with_capacity(n: usize) -> Self {
        FluxesTimeseries::with_capacity(n)
    }

    fn push(&mut self, f: &Fluxes) {
        FluxesTimeseries::push(self, f)
    }

    fn len(&self) -> usize {
        FluxesTimeseries::len(self)
    }

    fn is_empty(&self) -> bool {
        FluxesTimeseries::is_empty(self)
    }
}

impl FluxesTimeseries {
    /// Split into the `(streamflow, storage)` pair.
    pub fn into_outputs(self) -> (Vec<f64>, Vec<f64>) {
        (self.streamflow, self.storage)
    }
}
