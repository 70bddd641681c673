//! UI-specific domain types for trend display
//!
//! The rendering layer keys a colour off the classification and an indicator
//! off the direction. Both live here so every surface agrees on them.

use crate::domain::metrics::{
    constants::display,
    trend::{TrendClassification, TrendDirection},
};
use nutype::nutype;

/// Hex color code for UI display
///
/// Validates that the color is a valid hex color code (e.g., "#FF0000")
#[nutype(
    validate(regex = r"^#[0-9A-Fa-f]{6}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ColorCode(String);

impl TrendClassification {
    /// Colour a trend with this classification is drawn in
    pub fn color(&self) -> ColorCode {
        let hex = match self {
            Self::Positive => display::POSITIVE_COLOR,
            Self::Negative => display::NEGATIVE_COLOR,
            Self::Neutral => display::NEUTRAL_COLOR,
        };
        ColorCode::try_new(hex.to_string()).expect("display colors are valid hex codes")
    }
}

impl TrendDirection {
    /// Arrow shown next to the formatted delta
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Up => display::UP_INDICATOR,
            Self::Down => display::DOWN_INDICATOR,
            Self::Flat => display::FLAT_INDICATOR,
        }
    }
}
