//! Pearson and point-biserial correlation
//!
//! Both return a fully classified [`CorrelationResult`]. Pathological input
//! (zero variance, NaN, infinities, mismatched lengths) never produces an
//! error or a non-finite number; it collapses to the degenerate result
//! `r = 0, p = 1`.

use super::significance::{correlation_t_statistic, two_tailed_p_value};
use super::types::CorrelationResult;

/// Calculate the Pearson correlation between two equal-length series
///
/// Returns a value between -1 and 1 together with a two-tailed p-value
/// from Student's t distribution with `n - 2` degrees of freedom.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> CorrelationResult {
    if x.len() != y.len() {
        return CorrelationResult::degenerate(0);
    }

    let n = x.len();
    if n < 3 || is_constant(x) || is_constant(y) {
        return CorrelationResult::degenerate(n);
    }

    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sum_xy += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    let denominator = (sum_x2 * sum_y2).sqrt();
    if denominator == 0.0 {
        return CorrelationResult::degenerate(n);
    }

    finish(sum_xy / denominator, n)
}

/// Calculate the point-biserial correlation of a binary and a continuous series
///
/// Uses the closed form `r = (M1 - M0) / s * sqrt(p * q)` with the population
/// standard deviation `s`; this equals Pearson on the binary series coerced
/// to {0, 1}. When either group is empty the result is degenerate with
/// `n = 0`.
pub fn point_biserial_correlation(binary: &[bool], continuous: &[f64]) -> CorrelationResult {
    if binary.len() != continuous.len() {
        return CorrelationResult::degenerate(0);
    }

    let mut n_true = 0usize;
    let mut sum_true = 0.0;
    let mut sum_false = 0.0;
    for (&flag, &value) in binary.iter().zip(continuous.iter()) {
        if flag {
            n_true += 1;
            sum_true += value;
        } else {
            sum_false += value;
        }
    }

    let n = binary.len();
    let n_false = n - n_true;
    if n_true == 0 || n_false == 0 {
        return CorrelationResult::degenerate(0);
    }
    if n < 3 || is_constant(continuous) {
        return CorrelationResult::degenerate(n);
    }

    let nf = n as f64;
    let mean = (sum_true + sum_false) / nf;
    let variance = continuous.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / nf;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 || !std_dev.is_finite() {
        return CorrelationResult::degenerate(n);
    }

    let mean_true = sum_true / n_true as f64;
    let mean_false = sum_false / n_false as f64;
    let p = n_true as f64 / nf;
    let q = n_false as f64 / nf;

    finish((mean_true - mean_false) / std_dev * (p * q).sqrt(), n)
}

/// Clamp, test for significance and classify
fn finish(r: f64, n: usize) -> CorrelationResult {
    if !r.is_finite() {
        return CorrelationResult::degenerate(n);
    }
    let r = r.clamp(-1.0, 1.0);

    let p_value = match correlation_t_statistic(r, n) {
        Some(t) => two_tailed_p_value(t, (n - 2) as f64),
        None => 0.0,
    };

    CorrelationResult::new(r, p_value, n)
}

fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&v| v == first),
        None => true,
    }
}
