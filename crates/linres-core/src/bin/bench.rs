/// Pure Rust benchmark for the linear reservoir.
///
/// Median wall time over repeated runs, deterministic LCG forcing, and
/// `black_box` to keep the optimiser honest.
use std::hint::black_box;
use std::time::{Duration, Instant};

use linres_core::linres::run;
use linres_core::{simulate_many, Parameters};
use tracing::info;

const REPEATS: usize = 7;

/// Deterministic precipitation series from a simple LCG.
fn make_precip(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64 * 10.0
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_run(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let params = Parameters::new(0.5);
    sizes
        .iter()
        .map(|&n| {
            let precip = make_precip(n, 42);
            black_box(run::run(&params, &precip, 0.0));
            let dur = median_time(|| {
                black_box(run::run(&params, &precip, 0.0));
            });
            ("run", n, dur)
        })
        .collect()
}

fn bench_ensemble(sizes: &[usize], n_sets: usize) -> Vec<(&'static str, usize, Duration)> {
    let sets: Vec<Parameters> = (1..=n_sets)
        .map(|i| Parameters::new(i as f64 / n_sets as f64))
        .collect();
    sizes
        .iter()
        .map(|&n| {
            let precip = make_precip(n, 7);
            black_box(simulate_many(&precip, 0.0, &sets));
            let dur = median_time(|| {
                black_box(simulate_many(&precip, 0.0, &sets));
            });
            ("simulate_many", n, dur)
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bench=info,linres_core=warn".into()),
        )
        .init();

    info!(repeats = REPEATS, "starting benchmarks");

    println!("Linear Reservoir Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>7}   {:>12}", "Case", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results = bench_run(&[3650, 36500, 365000]);
    all_results.extend(bench_ensemble(&[3650, 36500], 100));

    for (case, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>7}      {:>8.3}", case, n, ms);
    }

    println!("============================================================");
}
