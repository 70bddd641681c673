//! Metric trend domain types
//!
//! Turns two raw readings of a metric into a formatted, classified trend
//! without touching I/O or shared state.

pub mod constants;
pub mod formatting;
pub mod trend;
pub mod ui_types;
pub mod values;

// Re-export commonly used types
pub use formatting::{format_delta, FormattedDelta};
pub use trend::{
    calculate_trend, PercentageChange, TrendClassification, TrendDirection, TrendOutcome,
    TrendPolicy,
};
pub use ui_types::ColorCode;
pub use values::{MetricValue, NumberLike, ParseError};
