use linres_macros::Fluxes;

#[derive(Fluxes)]
pub struct BadFluxes {
    pub precip: f64,
    pub count: i32,
}

fn main() {
    let f = BadFluxes { precip: 1.0, count: 2 };
    println!("{} {}", f.precip, f.count);
}
