//! Constants for trend calculation and delta formatting

/// Arithmetic constants for percentage change
pub mod calculation {
    /// Multiplier turning a ratio into percentage points
    pub const PERCENT_MULTIPLIER: f64 = 100.0;

    /// Change reported when a metric grows from a zero baseline
    pub const ZERO_BASELINE_INCREASE_PERCENT: f64 = 100.0;

    /// Denominator used when the baseline is zero and the metric went negative
    pub const ZERO_BASELINE_DENOMINATOR: f64 = 1.0;
}

/// Rendering constants for formatted deltas
pub mod formatting {
    /// Shown in place of a delta when either reading is missing or unparseable
    pub const UNAVAILABLE_DELTA: &str = "—";

    /// Magnitudes below this get [`FINE_DECIMALS`], the rest [`COARSE_DECIMALS`]
    pub const FINE_PRECISION_LIMIT: f64 = 10.0;

    /// Decimal places for small changes
    pub const FINE_DECIMALS: u32 = 2;

    /// Decimal places for large changes
    pub const COARSE_DECIMALS: u32 = 1;

    /// Largest magnitude rounded in decimal arithmetic
    pub const DECIMAL_MAGNITUDE_LIMIT: f64 = 1e25;

    /// Prefix for non-negative changes
    pub const POSITIVE_SIGN: &str = "+";

    /// Prefix for negative changes
    pub const NEGATIVE_SIGN: &str = "-";

    /// Suffix appended to every formatted delta
    pub const PERCENT_SUFFIX: &str = "%";
}

/// Display tokens keyed by classification and direction
pub mod display {
    /// Colour for favourable trends
    pub const POSITIVE_COLOR: &str = "#008060";

    /// Colour for unfavourable trends
    pub const NEGATIVE_COLOR: &str = "#D72C0D";

    /// Colour for unchanged or suppressed trends
    pub const NEUTRAL_COLOR: &str = "#6D7175";

    pub const UP_INDICATOR: &str = "↑";
    pub const DOWN_INDICATOR: &str = "↓";
    pub const FLAT_INDICATOR: &str = "→";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_constants() {
        assert_eq!(calculation::PERCENT_MULTIPLIER, 100.0);
        assert_eq!(calculation::ZERO_BASELINE_INCREASE_PERCENT, 100.0);
        assert_eq!(calculation::ZERO_BASELINE_DENOMINATOR, 1.0);
    }

    #[test]
    fn test_precision_constants_are_ordered() {
        const _: () = assert!(formatting::FINE_DECIMALS > formatting::COARSE_DECIMALS);
    }

    #[test]
    fn test_display_colors_are_distinct() {
        assert_ne!(display::POSITIVE_COLOR, display::NEGATIVE_COLOR);
        assert_ne!(display::POSITIVE_COLOR, display::NEUTRAL_COLOR);
        assert_ne!(display::NEGATIVE_COLOR, display::NEUTRAL_COLOR);
    }
}
