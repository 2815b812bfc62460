use approx::assert_relative_eq;
use linres_core::linres::run::run;
use linres_core::{simulate, simulate_many, Parameters};

/// Straight transcription of the recurrence, used as the reference.
fn reference(precip: &[f64], initial_state: f64, k: f64) -> (Vec<f64>, Vec<f64>) {
    let n = precip.len();
    let mut q = vec![0.0; n];
    let mut s = vec![0.0; n];
    if n == 0 {
        return (q, s);
    }
    s[0] = initial_state;
    for t in 1..n {
        q[t] = precip[t] - (k * precip[t] - s[t - 1]) * (1.0 - (-k).exp());
        s[t] = q[t] - q[t - 1];
    }
    (q, s)
}

/// Deterministic storm-like series.
fn storm(n: usize) -> Vec<f64> {
    (0..n)
        .map(|t| {
            let x = t as f64;
            (10.0 * (-((x - 12.0) / 4.0).powi(2)).exp() + 0.3 * (x / 3.0).sin().abs()).max(0.0)
        })
        .collect()
}

#[test]
fn known_value_scenario() {
    let precip = [0.0, 10.0, 5.0, 0.0];
    let (q, s) = simulate(&precip, 2.0, &Parameters::new(0.5));
    let f = 1.0 - (-0.5f64).exp();

    assert_eq!(s[0], 2.0);
    assert_eq!(q[0], 0.0);

    let q1 = 10.0 - (0.5 * 10.0 - 2.0) * f;
    assert_relative_eq!(q[1], q1, epsilon = 1e-9);
    assert_relative_eq!(q[1], 8.8196, epsilon = 1e-4);
    assert_relative_eq!(s[1], q1, epsilon = 1e-9);

    let q2 = 5.0 - (0.5 * 5.0 - s[1]) * f;
    assert_relative_eq!(q[2], q2, epsilon = 1e-9);
    assert_relative_eq!(s[2], q2 - q1, epsilon = 1e-9);

    let q3 = 0.0 - (0.0 - s[2]) * f;
    assert_relative_eq!(q[3], q3, epsilon = 1e-9);
    assert_relative_eq!(s[3], q3 - q2, epsilon = 1e-9);
}

#[test]
fn bit_identical_to_reference() {
    let precip = storm(48);
    for &k in &[0.05, 0.3, 0.5, 0.99] {
        let (q, s) = simulate(&precip, 1.5, &Parameters::new(k));
        let (q_ref, s_ref) = reference(&precip, 1.5, k);
        assert_eq!(q, q_ref, "streamflow differs for k={k}");
        assert_eq!(s, s_ref, "storage differs for k={k}");
    }
}

#[test]
fn deterministic() {
    let precip = storm(100);
    let p = Parameters::new(0.4);
    let a = simulate(&precip, 3.0, &p);
    let b = simulate(&precip, 3.0, &p);
    assert_eq!(a, b);
}

#[test]
fn lengths_match_input() {
    let p = Parameters::new(0.5);
    for n in [0usize, 1, 2, 17] {
        let precip = storm(n);
        let (q, s) = simulate(&precip, 1.0, &p);
        assert_eq!(q.len(), n);
        assert_eq!(s.len(), n);
    }
}

#[test]
fn storage_pinned_to_initial_state() {
    let precip = storm(10);
    for init in [0.0, 2.0, -4.5, 1e6] {
        let (_, s) = simulate(&precip, init, &Parameters::new(0.3));
        assert_eq!(s[0], init);
    }
}

#[test]
fn zero_length_gives_empty_outputs() {
    let (q, s) = simulate(&[], 2.0, &Parameters::new(0.5));
    assert!(q.is_empty());
    assert!(s.is_empty());
}

#[test]
fn single_step_never_runs_recurrence() {
    let (q, s) = simulate(&[42.0], 2.0, &Parameters::new(0.5));
    assert_eq!(q, vec![0.0]);
    assert_eq!(s, vec![2.0]);
}

#[test]
fn linear_in_inputs() {
    let precip = storm(30);
    let p = Parameters::new(0.35);
    let (q, s) = simulate(&precip, 2.0, &p);

    for c in [0.5, 3.0, 10.0] {
        let scaled: Vec<f64> = precip.iter().map(|v| c * v).collect();
        let (qc, sc) = simulate(&scaled, c * 2.0, &p);
        for t in 0..precip.len() {
            assert_relative_eq!(qc[t], c * q[t], epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(sc[t], c * s[t], epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn input_not_mutated() {
    let precip = storm(20);
    let copy = precip.clone();
    let _ = simulate(&precip, 1.0, &Parameters::new(0.2));
    assert_eq!(precip, copy);
}

#[test]
fn non_physical_k_still_runs() {
    let precip = storm(8);
    let (q, s) = simulate(&precip, 1.0, &Parameters::new(-0.5));
    assert_eq!(q.len(), 8);
    assert_eq!(s[0], 1.0);
    assert!(q.iter().all(|v| v.is_finite()));
}

#[test]
fn extreme_negative_k_propagates_non_finite() {
    // exp(1000) overflows, so the runoff fraction is -inf
    let precip = [0.0, 10.0, 5.0, 0.0, 3.0];
    let (q, s) = simulate(&precip, 1.0, &Parameters::new(-1000.0));
    assert_eq!(q.len(), 5);
    assert_eq!(s[0], 1.0);
    assert_eq!(q[0], 0.0);
    for t in 1..precip.len() {
        assert!(!q[t].is_finite(), "q[{t}] = {}", q[t]);
        assert!(!s[t].is_finite(), "s[{t}] = {}", s[t]);
    }
}

#[test]
fn parameter_sets_are_independent() {
    let precip = storm(24);
    let sets: Vec<Parameters> = [0.1, 0.5, 0.9].into_iter().map(Parameters::new).collect();
    let sims = simulate_many(&precip, 0.5, &sets);

    for sim in &sims {
        let (q, s) = reference(&precip, 0.5, sim.params.k);
        assert_eq!(sim.streamflow, q);
        assert_eq!(sim.storage, s);
    }
}

#[test]
fn concurrent_runs_match_sequential() {
    let precip = storm(64);
    let sets: Vec<Parameters> = (1..=8).map(|i| Parameters::new(i as f64 / 10.0)).collect();
    let sequential = simulate_many(&precip, 1.0, &sets);

    let forcing = &precip;
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sets
            .iter()
            .map(|p| scope.spawn(move || run(p, forcing, 1.0)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("simulation thread panicked"))
            .collect()
    });

    for (seq, par) in sequential.iter().zip(parallel) {
        assert_eq!(seq.streamflow, par.streamflow);
        assert_eq!(seq.storage, par.storage);
    }
}
