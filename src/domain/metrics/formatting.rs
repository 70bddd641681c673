//! Percentage delta rendering

use crate::domain::metrics::constants::formatting::{
    COARSE_DECIMALS, DECIMAL_MAGNITUDE_LIMIT, FINE_DECIMALS, FINE_PRECISION_LIMIT, NEGATIVE_SIGN,
    PERCENT_SUFFIX, POSITIVE_SIGN, UNAVAILABLE_DELTA,
};
use derive_more::{Display, Into};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A rendered percentage delta such as `"+7.10%"` or `"—"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Into)]
#[serde(transparent)]
pub struct FormattedDelta(String);

impl FormattedDelta {
    /// Placeholder used when no delta can be computed
    pub fn unavailable() -> Self {
        Self(UNAVAILABLE_DELTA.to_string())
    }

    pub fn is_unavailable(&self) -> bool {
        self.0 == UNAVAILABLE_DELTA
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FormattedDelta {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a percentage change with a sign, adaptive precision and a `%` suffix
///
/// Non-negative changes get a leading `+`; negative ones carry their own `-`.
/// Magnitudes under 10 keep two decimals, larger ones keep one. Exact
/// midpoints round away from zero, so 31.25 renders as `31.3`.
pub fn format_delta(change_percent: f64) -> FormattedDelta {
    // -0.0 compares equal to zero, so it takes the "+" sign
    let sign = if change_percent >= 0.0 {
        POSITIVE_SIGN
    } else {
        NEGATIVE_SIGN
    };
    let magnitude = change_percent.abs();
    let decimals = if magnitude < FINE_PRECISION_LIMIT {
        FINE_DECIMALS
    } else {
        COARSE_DECIMALS
    };

    FormattedDelta(format!(
        "{sign}{}{PERCENT_SUFFIX}",
        round_half_away_from_zero(magnitude, decimals)
    ))
}

/// Render `magnitude` with exactly `decimals` places
///
/// Rounds the exact binary value, so only true midpoints such as 0.125 move
/// up. Magnitudes past [`DECIMAL_MAGNITUDE_LIMIT`] fall back to the float
/// formatter.
fn round_half_away_from_zero(magnitude: f64, decimals: u32) -> String {
    let exact =
        Decimal::from_f64_retain(magnitude).filter(|_| magnitude < DECIMAL_MAGNITUDE_LIMIT);
    match exact {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        None => format!("{magnitude:.precision$}", precision = decimals as usize),
    }
}
