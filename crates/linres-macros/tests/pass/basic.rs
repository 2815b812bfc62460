use linres_macros::Fluxes;

#[derive(Debug, Clone, Copy, PartialEq, Fluxes)]
pub struct ReservoirFluxes {
    pub precip: f64,
    pub streamflow: f64,
    pub storage: f64,
}

fn main() {
    let f = ReservoirFluxes { precip: 10.0, streamflow: 8.5, storage: 2.0 };
    let mut ts = ReservoirFluxesTimeseries::with_capacity(4);
    assert!(ts.is_empty());
    ts.push(&f);
    assert_eq!(ts.len(), 1);
    assert_eq!(ts.streamflow, vec![8.5]);
    assert_eq!(ts.get(0), Some(f));
    assert_eq!(ts.get(1), None);
    assert_eq!(f.to_array(), [10.0, 8.5, 2.0]);
    assert_eq!(ReservoirFluxes::field_names(), &["precip", "streamflow", "storage"]);
}
