//! Application services and business logic orchestration
//!
//! This module contains application services that coordinate
//! domain logic and infrastructure components.

pub mod app;
pub mod localization;

pub use app::{Application, BatchSummary, TrendReport, TrendRequest};
pub use localization::Localization;
