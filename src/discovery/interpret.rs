//! Plain-language interpretation of a finding
//!
//! A sentence is built from three parts:
//!
//! 1. the relationship, phrased by metric role (boolean event vs. continuous,
//!    lagged vs. same-day) and direction of r
//! 2. a strength clause, only for strong and very strong relationships
//! 3. a confidence clause from the p-value tier

use crate::catalog::MetricDefinition;
use crate::stats::{Confidence, CorrelationResult, Strength};

/// Describe a correlation between two metrics
pub fn interpret(a: &MetricDefinition, b: &MetricDefinition, result: &CorrelationResult) -> String {
    let mut text = relationship_sentence(a, b, result.r);
    if let Some(clause) = strength_clause(result.strength) {
        text.push(' ');
        text.push_str(clause);
    }
    text.push(' ');
    text.push_str(&confidence_clause(result));
    text
}

fn relationship_sentence(a: &MetricDefinition, b: &MetricDefinition, r: f64) -> String {
    let positive = r >= 0.0;
    match (a.is_boolean(), b.is_boolean()) {
        (true, false) => event_sentence(a, b, positive),
        (false, true) => event_sentence(b, a, positive),
        _ => trend_sentence(a, b, positive),
    }
}

/// Boolean event against a continuous outcome
///
/// Previous-day booleans are described as noun phrases ("a workout") that
/// follow "after" or "with". Same-day booleans are clauses.
fn event_sentence(event: &MetricDefinition, outcome: &MetricDefinition, positive: bool) -> String {
    let direction = if positive { "higher" } else { "lower" };
    let (event_text, outcome_text) = (&event.description, &outcome.description);
    match (event.is_lagged(), outcome.is_lagged()) {
        (true, false) => format!("On days after {event_text}, {outcome_text} tends to be {direction}."),
        (false, true) => format!(
            "On days when {event_text}, the previous day's {outcome_text} tends to be {direction}."
        ),
        (true, true) => format!("On days with {event_text}, {outcome_text} tends to be {direction}."),
        (false, false) => format!("On days when {event_text}, {outcome_text} tends to be {direction}."),
    }
}

/// Two continuous metrics
fn trend_sentence(a: &MetricDefinition, b: &MetricDefinition, positive: bool) -> String {
    let trend = if positive { "increase" } else { "decrease" };
    match (a.is_lagged(), b.is_lagged()) {
        (true, false) => format!(
            "When {} goes up, next day's {} tends to {trend}.",
            a.description, b.description
        ),
        (false, true) => format!(
            "When {} goes up, next day's {} tends to {trend}.",
            b.description, a.description
        ),
        _ => format!(
            "When {} goes up, {} tends to {trend}.",
            a.description, b.description
        ),
    }
}

fn strength_clause(strength: Strength) -> Option<&'static str> {
    match strength {
        Strength::VeryStrong => Some("This is a very strong relationship."),
        Strength::Strong => Some("This is a strong relationship."),
        Strength::Moderate | Strength::Weak | Strength::Negligible => None,
    }
}

fn confidence_clause(result: &CorrelationResult) -> String {
    match result.confidence {
        Confidence::Strong => "High statistical confidence (p < 0.01).".to_string(),
        Confidence::Moderate => "Moderate statistical confidence (p < 0.05).".to_string(),
        Confidence::Exploratory => "Exploratory finding (p < 0.1).".to_string(),
        Confidence::NotSignificant => {
            format!("Not statistically significant (p = {:.3}).", result.p_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys::*;
    use crate::catalog::MetricCatalog;

    fn catalog() -> MetricCatalog {
        MetricCatalog::builtin().unwrap()
    }

    #[test]
    fn test_lagged_event_reads_as_day_after() {
        let catalog = catalog();
        let workout = catalog.get(PREV_DAY_WORKOUT).unwrap();
        let sleep = catalog.get(SLEEP_SCORE).unwrap();
        let result = CorrelationResult::new(-0.8, 0.0001, 90);

        let text = interpret(sleep, workout, &result);

        assert_eq!(
            text,
            "On days after a workout, sleep score tends to be lower. \
             This is a very strong relationship. High statistical confidence (p < 0.01)."
        );
    }

    #[test]
    fn test_same_day_event() {
        let catalog = catalog();
        let sunny = catalog.get(SUNNY_DAY).unwrap();
        let mood = catalog.get(MOOD).unwrap();
        let result = CorrelationResult::new(0.35, 0.03, 40);

        let text = interpret(sunny, mood, &result);

        assert!(text.starts_with("On days when it was sunny, mood tends to be higher."));
        assert!(!text.contains("relationship."));
        assert!(text.ends_with("Moderate statistical confidence (p < 0.05)."));
    }

    #[test]
    fn test_lagged_continuous_reads_as_next_day() {
        let catalog = catalog();
        let caffeine = catalog.get(PREV_DAY_TOTAL_CAFFEINE_MG).unwrap();
        let sleep = catalog.get(SLEEP_SCORE).unwrap();
        let result = CorrelationResult::new(-0.55, 0.08, 12);

        let text = interpret(sleep, caffeine, &result);

        assert!(text.starts_with("When caffeine intake goes up, next day's sleep score tends to decrease."));
        assert!(text.contains("This is a strong relationship."));
        assert!(text.ends_with("Exploratory finding (p < 0.1)."));
    }

    #[test]
    fn test_same_day_event_against_lagged_outcome() {
        let catalog = catalog();
        let workout = catalog.get(WORKOUT).unwrap();
        let caffeine = catalog.get(PREV_DAY_TOTAL_CAFFEINE_MG).unwrap();
        let result = CorrelationResult::new(0.4, 0.04, 60);

        let text = interpret(caffeine, workout, &result);

        assert!(text.starts_with(
            "On days when you worked out, the previous day's caffeine intake tends to be higher."
        ));
    }

    #[test]
    fn test_two_lagged_metrics_read_as_same_day() {
        let catalog = catalog();
        let coffee = catalog.get(PREV_DAY_AFTERNOON_COFFEE).unwrap();
        let caffeine = catalog.get(PREV_DAY_TOTAL_CAFFEINE_MG).unwrap();
        let result = CorrelationResult::new(0.45, 0.02, 60);

        let text = interpret(coffee, caffeine, &result);

        assert!(text.starts_with("On days with an afternoon coffee, caffeine intake tends to be higher."));
        assert!(!text.contains("On days when an"));
    }

    #[test]
    fn test_plain_continuous_and_not_significant() {
        let catalog = catalog();
        let mood = catalog.get(MOOD).unwrap();
        let energy = catalog.get(ENERGY).unwrap();
        let result = CorrelationResult::new(0.2, 0.2346, 30);

        let text = interpret(mood, energy, &result);

        assert!(text.starts_with(&format!(
            "When {} goes up, {} tends to increase.",
            mood.description, energy.description
        )));
        assert!(text.ends_with("Not statistically significant (p = 0.235)."));
    }
}
