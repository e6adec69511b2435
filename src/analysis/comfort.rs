//! Composite comfort-index aggregation
//!
//! Collapses the per-condition probabilities into a single 0-100 score:
//! 100 means no adverse condition is ever observed, 0 means the weighted
//! discomfort saturates the scale.

use crate::models::ConditionResult;

/// Weight applied to a condition name not in the fixed table
///
/// Keeps the aggregation forward-compatible if conditions are added without
/// updating the weights.
const DEFAULT_CONDITION_WEIGHT: f64 = 0.10;

/// Fixed aggregation weight for a condition name
#[must_use]
pub fn condition_weight(condition: &str) -> f64 {
    match condition {
        "Very Hot" | "Very Cold" => 0.30,
        "Heavy Rain" => 0.25,
        "Strong Wind" => 0.15,
        _ => DEFAULT_CONDITION_WEIGHT,
    }
}

/// Aggregate condition probabilities into a comfort index in [0, 100]
///
/// discomfort = Σ probability/100 × weight; comfort = (1 − discomfort) × 100,
/// rounded and clamped. Pure, and monotonically non-increasing in each input
/// probability.
#[must_use]
pub fn aggregate_comfort(results: &[ConditionResult]) -> u8 {
    let discomfort: f64 = results
        .iter()
        .map(|result| result.probability / 100.0 * condition_weight(&result.condition))
        .sum();

    let comfort = ((1.0 - discomfort) * 100.0).round();
    comfort.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendLabel;
    use rstest::rstest;

    fn result(condition: &str, probability: f64) -> ConditionResult {
        ConditionResult {
            condition: condition.to_string(),
            probability,
            threshold: String::new(),
            trend: TrendLabel::Stable,
            confidence: 0.8,
            historical_mean: 0.0,
            trend_slope: 0.0,
            p_value: 0.15,
        }
    }

    fn standard_results(hot: f64, cold: f64, rain: f64, wind: f64) -> Vec<ConditionResult> {
        vec![
            result("Very Hot", hot),
            result("Very Cold", cold),
            result("Heavy Rain", rain),
            result("Strong Wind", wind),
        ]
    }

    #[test]
    fn test_no_risk_is_full_comfort() {
        assert_eq!(aggregate_comfort(&standard_results(0.0, 0.0, 0.0, 0.0)), 100);
    }

    #[test]
    fn test_total_risk_is_zero_comfort() {
        // Weights sum to 1.0, so certain adverse conditions floor the score
        assert_eq!(
            aggregate_comfort(&standard_results(100.0, 100.0, 100.0, 100.0)),
            0
        );
    }

    #[test]
    fn test_weighted_mix() {
        // 0.5*0.3 + 0.2*0.25 = 0.2 discomfort
        let comfort = aggregate_comfort(&standard_results(50.0, 0.0, 20.0, 0.0));
        assert_eq!(comfort, 80);
    }

    #[rstest]
    #[case("Very Hot", 0.30)]
    #[case("Very Cold", 0.30)]
    #[case("Heavy Rain", 0.25)]
    #[case("Strong Wind", 0.15)]
    #[case("Blizzard", 0.10)]
    fn test_condition_weights(#[case] condition: &str, #[case] expected: f64) {
        assert_eq!(condition_weight(condition), expected);
    }

    #[test]
    fn test_unrecognized_condition_uses_default_weight() {
        let results = vec![result("Dust Storm", 100.0)];
        assert_eq!(aggregate_comfort(&results), 90);
    }

    #[test]
    fn test_output_always_in_range() {
        for probability in [0.0, 12.5, 50.0, 99.9, 100.0] {
            let comfort = aggregate_comfort(&standard_results(
                probability,
                probability,
                probability,
                probability,
            ));
            assert!(comfort <= 100);
        }
    }

    #[test]
    fn test_monotone_non_increasing_in_each_probability() {
        let base = standard_results(30.0, 10.0, 20.0, 5.0);
        let base_comfort = aggregate_comfort(&base);

        for index in 0..base.len() {
            let mut raised = base.clone();
            raised[index].probability += 25.0;
            assert!(
                aggregate_comfort(&raised) <= base_comfort,
                "raising {} probability must not raise comfort",
                raised[index].condition
            );
        }
    }
}
