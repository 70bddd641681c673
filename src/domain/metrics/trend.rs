//! Trend calculation between two readings of the same metric

use crate::domain::metrics::{
    constants::calculation::{
        PERCENT_MULTIPLIER, ZERO_BASELINE_DENOMINATOR, ZERO_BASELINE_INCREASE_PERCENT,
    },
    formatting::{format_delta, FormattedDelta},
    values::{MetricValue, NumberLike},
};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether growth in a metric is desirable
///
/// Revenue going up is good; a chargeback rate going up is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendPolicy {
    #[default]
    PositiveIsGood,
    NegativeIsGood,
}

impl fmt::Display for TrendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositiveIsGood => write!(f, "positive_is_good"),
            Self::NegativeIsGood => write!(f, "negative_is_good"),
        }
    }
}

/// Semantic bucket a trend is styled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendClassification {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Direction a metric moved in, used to pick an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Signed change between two readings, in percentage points
#[nutype(
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct PercentageChange(f64);

impl PercentageChange {
    /// Relative change from `previous` to `current`
    ///
    /// A zero baseline reports +100% for growth and 0% for no change. When the
    /// baseline is zero and the metric went negative the raw difference is
    /// scaled as if the baseline were 1. Returns `None` if the result overflows.
    pub fn between(current: MetricValue, previous: MetricValue) -> Option<Self> {
        let zero_baseline = previous.is_zero();
        let change = if zero_baseline && current.is_zero() {
            0.0
        } else if zero_baseline && current.into_inner() > 0.0 {
            ZERO_BASELINE_INCREASE_PERCENT
        } else {
            let denominator = if zero_baseline {
                ZERO_BASELINE_DENOMINATOR
            } else {
                previous.into_inner()
            };
            (current.into_inner() - previous.into_inner()) / denominator * PERCENT_MULTIPLIER
        };

        Self::try_new(change).ok()
    }

    pub fn is_zero(&self) -> bool {
        self.into_inner() == 0.0
    }
}

/// Rendered summary of one trend evaluation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendOutcome {
    pub formatted_delta: FormattedDelta,
    pub classification: TrendClassification,
    pub direction: TrendDirection,
}

impl TrendOutcome {
    /// Outcome used when either reading is missing or unparseable
    pub fn unavailable() -> Self {
        Self {
            formatted_delta: FormattedDelta::unavailable(),
            classification: TrendClassification::Neutral,
            direction: TrendDirection::Flat,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.formatted_delta.is_unavailable()
    }
}

/// Summarize the move from `previous` to `current` under `policy`
///
/// Missing or unparseable readings on either side give
/// [`TrendOutcome::unavailable`]. With `neutral_on_decrease` set, a decrease
/// that would be styled negative is styled neutral instead.
pub fn calculate_trend(
    current: &NumberLike,
    previous: &NumberLike,
    policy: TrendPolicy,
    neutral_on_decrease: bool,
) -> TrendOutcome {
    let (Ok(current), Ok(previous)) = (current.to_metric_value(), previous.to_metric_value())
    else {
        return TrendOutcome::unavailable();
    };
    let Some(change) = PercentageChange::between(current, previous) else {
        return TrendOutcome::unavailable();
    };

    let formatted_delta = format_delta(change.into_inner());
    if change.is_zero() {
        return TrendOutcome {
            formatted_delta,
            classification: TrendClassification::Neutral,
            direction: TrendDirection::Flat,
        };
    }

    let is_increase = current >= previous;
    let good_direction = match policy {
        TrendPolicy::PositiveIsGood => is_increase,
        TrendPolicy::NegativeIsGood => !is_increase,
    };

    let classification = if good_direction {
        TrendClassification::Positive
    } else if neutral_on_decrease && !is_increase {
        TrendClassification::Neutral
    } else {
        TrendClassification::Negative
    };
    let direction = if is_increase {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    TrendOutcome {
        formatted_delta,
        classification,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn metric(value: f64) -> MetricValue {
        MetricValue::try_new(value).unwrap()
    }

    fn trend(current: impl Into<NumberLike>, previous: impl Into<NumberLike>) -> TrendOutcome {
        calculate_trend(
            &current.into(),
            &previous.into(),
            TrendPolicy::PositiveIsGood,
            false,
        )
    }

    #[rstest]
    #[case(NumberLike::Absent, NumberLike::Number(10.0))]
    #[case(NumberLike::Number(10.0), NumberLike::Absent)]
    #[case(NumberLike::Text("abc".to_string()), NumberLike::Number(10.0))]
    #[case(NumberLike::Number(10.0), NumberLike::Text("n/a".to_string()))]
    #[case(NumberLike::Number(f64::NAN), NumberLike::Number(10.0))]
    #[case(NumberLike::Number(10.0), NumberLike::Number(f64::INFINITY))]
    #[case(NumberLike::Absent, NumberLike::Absent)]
    fn test_missing_or_garbage_input_is_unavailable(
        #[case] current: NumberLike,
        #[case] previous: NumberLike,
    ) {
        for policy in [TrendPolicy::PositiveIsGood, TrendPolicy::NegativeIsGood] {
            for neutral_on_decrease in [false, true] {
                let outcome = calculate_trend(&current, &previous, policy, neutral_on_decrease);
                assert_eq!(outcome, TrendOutcome::unavailable());
                assert_eq!(outcome.formatted_delta.as_str(), "—");
                assert_eq!(outcome.classification, TrendClassification::Neutral);
                assert_eq!(outcome.direction, TrendDirection::Flat);
            }
        }
    }

    #[test]
    fn test_increase_under_positive_policy() {
        let outcome = trend(100.0, 50.0);
        assert_eq!(outcome.formatted_delta.as_str(), "+100.0%");
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_decrease_under_positive_policy() {
        let outcome = trend(50.0, 100.0);
        assert_eq!(outcome.formatted_delta.as_str(), "-50.0%");
        assert_eq!(outcome.classification, TrendClassification::Negative);
        assert_eq!(outcome.direction, TrendDirection::Down);
    }

    #[test]
    fn test_growth_from_zero_baseline() {
        let outcome = trend(5.0, 0.0);
        assert_eq!(outcome.formatted_delta.as_str(), "+100.0%");
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_zero_to_zero_is_flat() {
        for policy in [TrendPolicy::PositiveIsGood, TrendPolicy::NegativeIsGood] {
            let outcome = calculate_trend(&0.0.into(), &0.0.into(), policy, true);
            assert_eq!(outcome.formatted_delta.as_str(), "+0.00%");
            assert_eq!(outcome.classification, TrendClassification::Neutral);
            assert_eq!(outcome.direction, TrendDirection::Flat);
        }
    }

    #[test]
    fn test_equal_readings_are_flat() {
        let outcome = calculate_trend(
            &42_i64.into(),
            &"42".into(),
            TrendPolicy::NegativeIsGood,
            false,
        );
        assert_eq!(outcome.formatted_delta.as_str(), "+0.00%");
        assert_eq!(outcome.classification, TrendClassification::Neutral);
        assert_eq!(outcome.direction, TrendDirection::Flat);
    }

    #[test]
    fn test_decrease_under_negative_policy_is_positive() {
        let outcome = calculate_trend(
            &50.0.into(),
            &100.0.into(),
            TrendPolicy::NegativeIsGood,
            false,
        );
        assert_eq!(outcome.formatted_delta.as_str(), "-50.0%");
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Down);
    }

    #[test]
    fn test_increase_under_negative_policy_is_negative() {
        let outcome = calculate_trend(
            &"2.5%".into(),
            &"2%".into(),
            TrendPolicy::NegativeIsGood,
            false,
        );
        assert_eq!(outcome.formatted_delta.as_str(), "+25.0%");
        assert_eq!(outcome.classification, TrendClassification::Negative);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_neutral_on_decrease_suppresses_negative_styling() {
        let outcome = calculate_trend(
            &80.0.into(),
            &100.0.into(),
            TrendPolicy::PositiveIsGood,
            true,
        );
        // 20 is past the fine-precision limit, so one decimal
        assert_eq!(outcome.formatted_delta.as_str(), "-20.0%");
        assert_eq!(outcome.classification, TrendClassification::Neutral);
        assert_eq!(outcome.direction, TrendDirection::Down);

        let small = calculate_trend(
            &97.0.into(),
            &100.0.into(),
            TrendPolicy::PositiveIsGood,
            true,
        );
        assert_eq!(small.formatted_delta.as_str(), "-3.00%");
        assert_eq!(small.classification, TrendClassification::Neutral);
    }

    #[test]
    fn test_neutral_on_decrease_leaves_bad_increases_alone() {
        let outcome = calculate_trend(
            &120.0.into(),
            &100.0.into(),
            TrendPolicy::NegativeIsGood,
            true,
        );
        assert_eq!(outcome.classification, TrendClassification::Negative);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_neutral_on_decrease_leaves_good_decreases_alone() {
        let outcome = calculate_trend(
            &80.0.into(),
            &100.0.into(),
            TrendPolicy::NegativeIsGood,
            true,
        );
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Down);
    }

    #[rstest]
    #[case(21.0, 16.0, "+31.3%")]
    #[case(3.0, 16.0, "-81.3%")]
    #[case(17.0, 16.0, "+6.25%")]
    #[case(33.0, 32.0, "+3.13%")]
    #[case(31.0, 32.0, "-3.13%")]
    fn test_midpoint_deltas_round_away_from_zero(
        #[case] current: f64,
        #[case] previous: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(trend(current, previous).formatted_delta.as_str(), expected);
    }

    #[test]
    fn test_currency_text_is_parsed() {
        let outcome = trend("$1,250.00", "$1,000.00");
        assert_eq!(outcome.formatted_delta.as_str(), "+25.0%");
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_negative_from_zero_baseline_scales_by_one() {
        let change = PercentageChange::between(metric(-5.0), metric(0.0)).unwrap();
        assert_eq!(change.into_inner(), -500.0);

        let outcome = trend(-5.0, 0.0);
        assert_eq!(outcome.formatted_delta.as_str(), "-500.0%");
        assert_eq!(outcome.classification, TrendClassification::Negative);
        assert_eq!(outcome.direction, TrendDirection::Down);
    }

    #[test]
    fn test_negative_baseline_uses_signed_denominator() {
        // (-5 - -10) / -10 = -50%, though the value itself went up
        let outcome = trend(-5.0, -10.0);
        assert_eq!(outcome.formatted_delta.as_str(), "-50.0%");
        assert_eq!(outcome.classification, TrendClassification::Positive);
        assert_eq!(outcome.direction, TrendDirection::Up);
    }

    #[test]
    fn test_overflowing_change_is_unavailable() {
        assert!(PercentageChange::between(metric(f64::MAX), metric(-f64::MAX)).is_none());
        assert!(trend(f64::MAX, -f64::MAX).is_unavailable());
    }

    #[test]
    fn test_percentage_change_between() {
        let change = PercentageChange::between(metric(0.9), metric(0.8)).unwrap();
        assert!((change.into_inner() - 12.5).abs() < 1e-10);
        assert!(!change.is_zero());

        assert!(PercentageChange::between(metric(0.0), metric(0.0))
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_outcome_serializes_for_rendering_layer() {
        let outcome = trend(107.1, 100.0);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "formattedDelta": "+7.10%",
                "classification": "positive",
                "direction": "up",
            })
        );
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: TrendPolicy = serde_json::from_str(r#""negative_is_good""#).unwrap();
        assert_eq!(policy, TrendPolicy::NegativeIsGood);
        assert_eq!(TrendPolicy::default(), TrendPolicy::PositiveIsGood);
        assert_eq!(TrendPolicy::NegativeIsGood.to_string(), "negative_is_good");
    }

    #[test]
    fn test_same_inputs_same_outcome() {
        let current = NumberLike::from("$1,234.50");
        let previous = NumberLike::from(987.0);
        let first = calculate_trend(&current, &previous, TrendPolicy::NegativeIsGood, true);
        let second = calculate_trend(&current, &previous, TrendPolicy::NegativeIsGood, true);
        assert_eq!(first, second);
    }
}
