//! Timing side-channel validation for the tag comparison.
//!
//! Uses Welch's t-test to check that `compare_bytes` takes the same time
//! whether two tags differ in their first byte or their last byte. An
//! early-exit comparison would show a large, consistent gap.
//!
//! The statistical test is sensitive to scheduler noise, so it is ignored by
//! default; run it with `cargo test -- --ignored` on an idle machine.

use std::time::Instant;

use slug_hasher::compare_bytes;

/// Number of timing samples per class.
const SAMPLES: usize = 10_000;

/// Welch's t-test threshold. |t| < 4.5 means no detectable timing difference.
const T_THRESHOLD: f64 = 4.5;

/// Tag length under test (SHA-512 sized, so an early exit would be visible).
const TAG_LEN: usize = 64;

#[inline(never)]
fn black_box_compare(a: &[u8], b: &[u8]) -> bool {
    std::hint::black_box(compare_bytes(std::hint::black_box(a), std::hint::black_box(b)))
}

/// Compute Welch's t-statistic for two independent samples.
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
        return 0.0; // Both distributions are constant.
    }

    (mean_a - mean_b) / denominator
}

#[test]
#[ignore = "statistical timing test; run on an idle machine"]
fn compare_bytes_no_timing_leak() {
    let expected = [0x5Au8; TAG_LEN];
    let mut early = expected;
    early[0] ^= 0xFF;
    let mut late = expected;
    late[TAG_LEN - 1] ^= 0xFF;

    for _ in 0..1_000 {
        black_box_compare(&expected, &early);
        black_box_compare(&expected, &late);
    }

    let mut times_a = Vec::with_capacity(SAMPLES);
    let mut times_b = Vec::with_capacity(SAMPLES);

    for _ in 0..SAMPLES {
        let start = Instant::now();
        let _ = black_box_compare(&expected, &early);
        let elapsed_a = start.elapsed().as_nanos();

        let start = Instant::now();
        let _ = black_box_compare(&expected, &late);
        let elapsed_b = start.elapsed().as_nanos();

        #[allow(clippy::cast_precision_loss)]
        {
            times_a.push(elapsed_a as f64);
            times_b.push(elapsed_b as f64);
        }
    }

    let abs_t = welch_t_statistic(&times_a, &times_b).abs();
    eprintln!("Tag comparison timing: |t| = {abs_t:.2} (threshold: {T_THRESHOLD})");
    assert!(
        abs_t < T_THRESHOLD,
        "timing leak: |t| = {abs_t:.2} exceeds {T_THRESHOLD}"
    );
}

#[test]
fn welch_t_test_identical_distributions() {
    let a = vec![1.0; 100];
    let b = vec![1.0; 100];
    assert!(welch_t_statistic(&a, &b).abs() < 0.001);
}

#[test]
fn welch_t_test_different_distributions() {
    let a: Vec<f64> = (0..1000).map(|i| 100.0 + f64::from(i % 3)).collect();
    let b: Vec<f64> = (0..1000).map(|i| 200.0 + f64::from(i % 3)).collect();
    assert!(welch_t_statistic(&a, &b).abs() > 100.0);
}
