//! ChargeMind trends - metric trend summaries for the chargeback dashboard
//!
//! Turns a current and a previous metric reading into a formatted percentage
//! delta, a semantic classification and a direction indicator, following
//! type-driven development principles.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use domain::metrics::{
    calculate_trend, NumberLike, TrendClassification, TrendDirection, TrendOutcome, TrendPolicy,
};
pub use error::{Error, Result};
