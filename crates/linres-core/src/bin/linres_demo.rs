use linres_core::forcing::{ForcingData, Resolution};
use linres_core::linres::run;
use linres_core::metrics::Metric;
use linres_core::{simulate_many, Parameters};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linres_demo=info,linres_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let params = match Parameters::checked(0.5) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "invalid parameters");
            return;
        }
    };

    // A short storm (mm/day), starting from 2 mm of storage
    let precip = vec![
        0.0, 10.0, 5.0, 0.0, 0.0, 2.0, 18.0, 25.0, 9.0, 3.0, 0.0, 0.0, 0.0, 1.0,
    ];
    let initial_state = 2.0;

    let forcing = match ForcingData::new(precip, Resolution::Daily) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "invalid forcing");
            return;
        }
    };

    let result = run::run_forcing(&params, &forcing, initial_state);

    println!(" Day | Precip |  Q (streamflow) |  Storage");
    println!("-----|--------|-----------------|---------");
    for t in 0..result.len() {
        println!(
            " {:>3} | {:>6.1} | {:>15.4} | {:>8.4}",
            t,
            result.precip[t],
            result.streamflow[t],
            result.storage[t],
        );
    }

    let total_p: f64 = result.precip.iter().sum();
    let total_q: f64 = result.streamflow.iter().sum();
    println!(
        "\nTotals over {:.0} days ({:?}): P={:.1}, Q={:.1}",
        forcing.duration_days(),
        forcing.resolution,
        total_p,
        total_q
    );

    // Score a small ensemble against the k = 0.5 run as pseudo-observations
    let ensemble: Vec<Parameters> = [0.2, 0.4, 0.5, 0.7, 0.9]
        .into_iter()
        .map(Parameters::new)
        .collect();
    for sim in simulate_many(&forcing.precip, initial_state, &ensemble) {
        match sim.score(Metric::Nse, &result.streamflow) {
            Ok(nse) => info!(k = sim.params.k, nse, "ensemble member"),
            Err(e) => warn!(k = sim.params.k, error = %e, "could not score member"),
        }
    }
}
