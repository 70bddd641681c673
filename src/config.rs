use crate::domain::config_types::{LocaleTag, LogFormat, StorageKey};
use crate::domain::metrics::TrendPolicy;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const ENVIRONMENT_PREFIX: &str = "CHARGEMIND";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub localization: LocalizationSettings,
    pub storage: StorageSettings,
    pub trends: TrendSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalizationSettings {
    pub default_locale: LocaleTag,
    pub supported_locales: Vec<LocaleTag>,
    /// Key the chosen locale is persisted under
    pub storage_key: StorageKey,
}

impl LocalizationSettings {
    pub fn is_supported(&self, locale: &LocaleTag) -> bool {
        self.supported_locales.contains(locale)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// JSON file holding persisted preferences
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrendSettings {
    /// Policy for requests that do not name one
    pub default_policy: TrendPolicy,
    pub neutral_on_decrease: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Settings {
    /// Load settings from `./config` for the environment named by `ENVIRONMENT`
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load_from(Path::new(DEFAULT_CONFIG_DIR), &environment)
    }

    /// Load settings from an explicit directory
    ///
    /// Sources are layered: built-in defaults, `default.*`, `{environment}.*`,
    /// `local.*`, then `CHARGEMIND__SECTION__KEY` environment variables.
    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        Self::load_layered(config_dir, environment, Self::environment_layer())
    }

    /// `CHARGEMIND__SECTION__KEY` variables, with comma-separated locale lists
    fn environment_layer() -> Environment {
        Environment::with_prefix(ENVIRONMENT_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("localization.supported_locales")
    }

    fn load_layered(
        config_dir: &Path,
        environment: &str,
        environment_layer: Environment,
    ) -> Result<Self, ConfigError> {
        let file = |name: &str| {
            let path = config_dir.join(name);
            File::with_name(&path.to_string_lossy()).required(false)
        };

        let config = Config::builder()
            // Start with default values
            .set_default("application.environment", environment)?
            .set_default("localization.default_locale", "en")?
            .set_default("localization.supported_locales", vec!["en", "fr", "de", "es"])?
            .set_default("localization.storage_key", "chargemind.locale")?
            .set_default("storage.path", ".chargemind/preferences.json")?
            .set_default("trends.default_policy", "positive_is_good")?
            .set_default("trends.neutral_on_decrease", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            // Add configuration files if they exist
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            // Add environment variables with prefix
            .add_source(environment_layer)
            .build()?;

        config.try_deserialize()
    }
}
