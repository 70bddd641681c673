//! Infrastructure layer for ChargeMind trends
//!
//! This module contains the implementations for external concerns like
//! persisted preferences and log wording.

pub mod key_value;
pub mod log_messages;

pub use key_value::*;
