//! Domain value types for metric readings
//!
//! Raw readings arrive in whatever shape the dashboard query or API payload
//! produced them. [`NumberLike`] captures those shapes and
//! [`NumberLike::to_metric_value`] is the single place they become numbers.

use nutype::nutype;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A finite metric reading
#[nutype(
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct MetricValue(f64);

impl MetricValue {
    /// Whether this reading is exactly zero (either sign)
    pub fn is_zero(&self) -> bool {
        self.into_inner() == 0.0
    }
}

/// A raw metric reading before normalization
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum NumberLike {
    /// A numeric measurement
    Number(f64),
    /// Numeric-looking text such as `"$1,234.50"` or `"12.5%"`
    Text(String),
    /// `null`, a missing field, or a value of any other shape
    #[default]
    Absent,
}

/// Why a reading could not be turned into a [`MetricValue`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("metric value is absent")]
    Absent,

    #[error("metric value {0:?} contains no number")]
    Unparseable(String),

    #[error("metric value is not finite")]
    NonFinite,
}

impl NumberLike {
    /// Normalize this reading into a finite number
    pub fn to_metric_value(&self) -> Result<MetricValue, ParseError> {
        match self {
            Self::Absent => Err(ParseError::Absent),
            Self::Number(value) => {
                MetricValue::try_new(*value).map_err(|_| ParseError::NonFinite)
            }
            Self::Text(text) => parse_text(text),
        }
    }
}

fn parse_text(text: &str) -> Result<MetricValue, ParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let literal =
        leading_float(&cleaned).ok_or_else(|| ParseError::Unparseable(text.to_string()))?;
    let value: f64 = literal
        .parse()
        .map_err(|_| ParseError::Unparseable(text.to_string()))?;

    MetricValue::try_new(value).map_err(|_| ParseError::NonFinite)
}

/// Longest prefix of `s` shaped like `-?digits.digits` holding at least one digit.
///
/// Trailing characters are ignored, so `"1.2.3"` yields `"1.2"` and `"12-5"`
/// yields `"12"`.
fn leading_float(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if bytes.first() == Some(&b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        let mut fraction_digits = 0;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
            fraction_digits += 1;
        }
        if digits + fraction_digits > 0 {
            end = fraction_end;
            digits += fraction_digits;
        }
    }

    (digits > 0).then_some(&s[..end])
}

impl From<Value> for NumberLike {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Absent, Self::Number),
            Value::String(text) => Self::Text(text),
            _ => Self::Absent,
        }
    }
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NumberLike {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberLike {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Option<T>> for NumberLike
where
    T: Into<NumberLike>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
