//! Timing side-channel check for [`compare_digests`].
//!
//! A simplified dudect-style analysis: time N comparisons of two equal
//! digests (class A) and of two digests that differ in the first character
//! (class B), then assert Welch's |t| stays below 4.5. An early-exit
//! comparison would make class B measurably faster.
//!
//! This is statistical. Scheduler noise can cause rare false positives, so
//! it runs only on request.

use std::time::Instant;

use cryptolab_core::digest::compute_digest;
use cryptolab_core::{compare_digests, HashAlgorithm};

/// Timing samples per class.
const SAMPLES: usize = 10_000;

/// |t| above this suggests leakage at >99.999% confidence.
const T_THRESHOLD: f64 = 4.5;

#[inline(never)]
fn black_box_compare(a: &str, b: &str) -> bool {
    std::hint::black_box(compare_digests(std::hint::black_box(a), std::hint::black_box(b)))
}

/// `t = (mean_a - mean_b) / sqrt(var_a/n_a + var_b/n_b)`
#[allow(clippy::cast_precision_loss)]
fn welch_t_statistic(a: &[f64], b: &[f64]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return f64::NAN;
    }

    let n_a = a.len() as f64;
    let n_b = b.len() as f64;

    let mean_a: f64 = a.iter().sum::<f64>() / n_a;
    let mean_b: f64 = b.iter().sum::<f64>() / n_b;

    let var_a: f64 = a.iter().map(|x| (x - mean_a).powi(2)).sum::<f64>() / (n_a - 1.0);
    let var_b: f64 = b.iter().map(|x| (x - mean_b).powi(2)).sum::<f64>() / (n_b - 1.0);

    let denominator = (var_a / n_a + var_b / n_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (mean_a - mean_b) / denominator
}

#[test]
fn welch_statistic_detects_shifted_distributions() {
    let a: Vec<f64> = (0..100).map(|i| f64::from(i % 10)).collect();
    let b: Vec<f64> = (0..100).map(|i| f64::from(i % 10) + 50.0).collect();
    assert!(welch_t_statistic(&a, &b).abs() > T_THRESHOLD);
    assert!(welch_t_statistic(&a, &a).abs() < f64::EPSILON);
}

#[test]
#[ignore = "statistical timing test; run with --ignored on a quiet machine"]
fn compare_digests_no_timing_leak() {
    let reference = compute_digest("timing reference", HashAlgorithm::Sha512).hash;
    let equal = reference.clone();
    let mut differing = reference.clone().into_bytes();
    differing[0] = if differing[0] == b'0' { b'1' } else { b'0' };
    let differing = String::from_utf8(differing).expect("hex stays ASCII");

    for _ in 0..100 {
        black_box_compare(&reference, &equal);
        black_box_compare(&reference, &differing);
    }

    let mut times_a = Vec::with_capacity(SAMPLES);
    let mut times_b = Vec::with_capacity(SAMPLES);

    for _ in 0..SAMPLES {
        let start = Instant::now();
        let _ = black_box_compare(&reference, &equal);
        let elapsed_a = start.elapsed().as_nanos();

        let start = Instant::now();
        let _ = black_box_compare(&reference, &differing);
        let elapsed_b = start.elapsed().as_nanos();

        #[allow(clippy::cast_precision_loss)]
        {
            times_a.push(elapsed_a as f64);
            times_b.push(elapsed_b as f64);
        }
    }

    let abs_t = welch_t_statistic(&times_a, &times_b).abs();
    eprintln!("compare_digests: |t| = {abs_t:.2} (threshold: {T_THRESHOLD}), samples = {SAMPLES}");
    assert!(
        abs_t < T_THRESHOLD,
        "compare_digests timing differs between equal and unequal inputs: |t| = {abs_t:.2}"
    );
}
