//! Domain types and business logic for ChargeMind trends
//!
//! This module contains the core domain types, following type-driven
//! development principles: raw readings are parsed once at the boundary and
//! everything downstream works with validated values.

pub mod config_types;
pub mod metrics;

pub use config_types::*;
pub use metrics::*;
