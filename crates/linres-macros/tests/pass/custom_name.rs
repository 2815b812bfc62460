use linres_macros::Fluxes;

#[derive(Debug, Clone, Copy, Fluxes)]
#[fluxes(timeseries_name = "Hydrograph")]
pub struct Outflow {
    pub streamflow: f64,
}

fn main() {
    let mut ts = Hydrograph::with_capacity(2);
    ts.push(&Outflow { streamflow: 1.5 });
    ts.push(&Outflow { streamflow: 0.5 });
    assert_eq!(ts.len(), 2);
    assert_eq!(Outflow::field_names(), &["streamflow"]);
}
