//! Significance testing for correlation coefficients
//!
//! The t-statistic of a correlation is compared against Student's t
//! distribution with `n - 2` degrees of freedom. The tail probability comes
//! from `statrs`, which evaluates the CDF through the regularized incomplete
//! beta function.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-tailed p-value for a t-statistic with `df` degrees of freedom
///
/// Returns 1.0 for a non-positive `df` or a NaN statistic, and 0.0 for an
/// infinite one.
pub fn two_tailed_p_value(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return 1.0;
    }
    if t.is_infinite() {
        return 0.0;
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => {
            let p = 2.0 * dist.sf(t.abs());
            if p.is_finite() {
                p.clamp(0.0, 1.0)
            } else {
                1.0
            }
        }
        Err(e) => {
            tracing::debug!(df, error = %e, "Invalid t distribution parameters");
            1.0
        }
    }
}

/// t-statistic for a correlation coefficient over `n` paired observations
///
/// Returns `None` when |r| is 1 (the statistic is unbounded).
pub fn correlation_t_statistic(r: f64, n: usize) -> Option<f64> {
    let denom = 1.0 - r * r;
    if denom <= f64::EPSILON {
        return None;
    }
    let df = n.saturating_sub(2) as f64;
    Some(r * (df / denom).sqrt())
}
