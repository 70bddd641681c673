//! Type-safe configuration types
//!
//! This module provides domain-specific types for configuration values,
//! ensuring validation at boundaries and preventing primitive obsession.

use nutype::nutype;

/// BCP 47 style language tag limited to a language and optional region
///
/// Accepts `en`, `fr`, `pt-BR`. Region subtags must be upper case, so
/// `pt-br` is rejected.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 16, regex = r"^[a-z]{2,3}(-[A-Z]{2})?$"),
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
pub struct LocaleTag(String);

/// Key under which a value is persisted in a key-value store
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 128, regex = r"^[a-zA-Z0-9][a-zA-Z0-9:._-]*$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct StorageKey(String);

/// Log output style for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}
