//! Result and classification types for correlation statistics

use serde::{Deserialize, Serialize};

/// Effect-size classification on |r|
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// |r| < 0.1
    Negligible,
    /// |r| < 0.3
    Weak,
    /// |r| < 0.5
    Moderate,
    /// |r| < 0.7
    Strong,
    /// |r| >= 0.7
    #[serde(rename = "very strong")]
    VeryStrong,
}

impl Strength {
    /// Classify a correlation coefficient
    pub fn from_r(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r < 0.1 {
            Strength::Negligible
        } else if abs_r < 0.3 {
            Strength::Weak
        } else if abs_r < 0.5 {
            Strength::Moderate
        } else if abs_r < 0.7 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Negligible => "negligible",
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Significance classification on the p-value
///
/// Ordered from least to most confident, so `confidence >= Confidence::Exploratory`
/// reads as "significant at the 0.1 level".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// p > 0.1
    #[serde(rename = "none")]
    NotSignificant,
    /// p <= 0.1
    Exploratory,
    /// p <= 0.05
    Moderate,
    /// p <= 0.01
    Strong,
}

impl Confidence {
    /// Classify a two-tailed p-value
    pub fn from_p_value(p: f64) -> Self {
        if p <= 0.01 {
            Confidence::Strong
        } else if p <= 0.05 {
            Confidence::Moderate
        } else if p <= 0.1 {
            Confidence::Exploratory
        } else {
            Confidence::NotSignificant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::NotSignificant => "none",
            Confidence::Exploratory => "exploratory",
            Confidence::Moderate => "moderate",
            Confidence::Strong => "strong",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a correlation test between two series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CorrelationResult {
    /// Correlation coefficient (-1 to 1)
    pub r: f64,
    /// Two-tailed p-value (0 to 1)
    pub p_value: f64,
    /// Number of paired observations
    pub n: usize,
    pub strength: Strength,
    pub confidence: Confidence,
}

impl CorrelationResult {
    /// Build a result, deriving both classifications
    pub fn new(r: f64, p_value: f64, n: usize) -> Self {
        Self {
            r,
            p_value,
            n,
            strength: Strength::from_r(r),
            confidence: Confidence::from_p_value(p_value),
        }
    }

    /// The "no information" result: r = 0, p = 1
    pub fn degenerate(n: usize) -> Self {
        Self::new(0.0, 1.0, n)
    }

    pub fn is_degenerate(&self) -> bool {
        self.r == 0.0 && self.p_value == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(Strength::from_r(0.05), Strength::Negligible);
        assert_eq!(Strength::from_r(0.1), Strength::Weak);
        assert_eq!(Strength::from_r(-0.29), Strength::Weak);
        assert_eq!(Strength::from_r(0.3), Strength::Moderate);
        assert_eq!(Strength::from_r(-0.5), Strength::Strong);
        assert_eq!(Strength::from_r(0.69), Strength::Strong);
        assert_eq!(Strength::from_r(0.7), Strength::VeryStrong);
        assert_eq!(Strength::from_r(-1.0), Strength::VeryStrong);
    }

    #[test]
    fn test_confidence_boundaries() {
        assert_eq!(Confidence::from_p_value(0.001), Confidence::Strong);
        assert_eq!(Confidence::from_p_value(0.01), Confidence::Strong);
        assert_eq!(Confidence::from_p_value(0.011), Confidence::Moderate);
        assert_eq!(Confidence::from_p_value(0.05), Confidence::Moderate);
        assert_eq!(Confidence::from_p_value(0.1), Confidence::Exploratory);
        assert_eq!(Confidence::from_p_value(0.2), Confidence::NotSignificant);
        assert!(Confidence::Strong > Confidence::Exploratory);
        assert!(Confidence::NotSignificant < Confidence::Exploratory);
    }

    #[test]
    fn test_result_serializes() {
        let result = CorrelationResult::new(-0.82, 0.004, 30);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"strength\":\"very strong\""));
        assert!(json.contains("\"confidence\":\"strong\""));

        let none = CorrelationResult::degenerate(12);
        let json = serde_json::to_string(&none).unwrap();
        assert!(json.contains("\"confidence\":\"none\""));
        assert!(none.is_degenerate());
    }
}
