use crate::infrastructure::key_value::StoreError;
use thiserror::Error;

/// ChargeMind trend service error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },
}

impl Error {
    pub fn unsupported_locale(locale: impl Into<String>) -> Self {
        Self::UnsupportedLocale {
            locale: locale.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
