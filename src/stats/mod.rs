//! Statistics Library
//!
//! Pure numeric functions with no dependencies on the rest of the crate:
//!
//! - **correlation**: Pearson and point-biserial coefficients
//! - **significance**: two-tailed t-test on a coefficient
//! - **types**: `CorrelationResult` with strength/confidence classification
//!
//! # Example
//!
//! ```rust
//! use daylens::stats::{pearson_correlation, Strength};
//!
//! let result = pearson_correlation(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]);
//! assert!((result.r - 1.0).abs() < 1e-9);
//! assert_eq!(result.strength, Strength::VeryStrong);
//! ```

pub mod correlation;
pub mod significance;
pub mod types;

pub use correlation::{pearson_correlation, point_biserial_correlation};
pub use significance::{correlation_t_statistic, two_tailed_p_value};
pub use types::{Confidence, CorrelationResult, Strength};
