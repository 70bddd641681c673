//! Locale selection at startup
//!
//! The active locale comes from explicit configuration plus whatever the
//! user picked last time, read through a [`KeyValueStore`]. Loading the
//! translated resources themselves happens elsewhere.

use crate::config::LocalizationSettings;
use crate::domain::config_types::LocaleTag;
use crate::infrastructure::key_value::KeyValueStore;
use crate::infrastructure::log_messages::localization::{
    IGNORING_STORED_LOCALE, LOCALE_CHANGED, USING_DEFAULT_LOCALE, USING_STORED_LOCALE,
};
use crate::{Error, Result};
use tracing::{info, instrument, warn};

/// The locale the application is running in
#[derive(Debug, Clone)]
pub struct Localization {
    settings: LocalizationSettings,
    active: LocaleTag,
}

impl Localization {
    /// Pick the active locale and persist it
    ///
    /// A stored locale wins when it is valid and supported; otherwise the
    /// configured default is used, which must itself be supported.
    #[instrument(skip_all)]
    pub async fn bootstrap(
        settings: &LocalizationSettings,
        store: &dyn KeyValueStore,
    ) -> Result<Self> {
        if !settings.is_supported(&settings.default_locale) {
            return Err(Error::unsupported_locale(
                settings.default_locale.to_string(),
            ));
        }

        let stored = store.get(&settings.storage_key).await?;
        let active = match stored.map(LocaleTag::try_new) {
            Some(Ok(locale)) if settings.is_supported(&locale) => {
                info!(locale = %locale, "{}", USING_STORED_LOCALE);
                locale
            }
            Some(_) => {
                warn!(fallback = %settings.default_locale, "{}", IGNORING_STORED_LOCALE);
                settings.default_locale.clone()
            }
            None => {
                info!(locale = %settings.default_locale, "{}", USING_DEFAULT_LOCALE);
                settings.default_locale.clone()
            }
        };

        store.put(&settings.storage_key, active.to_string()).await?;

        Ok(Self {
            settings: settings.clone(),
            active,
        })
    }

    pub fn active(&self) -> &LocaleTag {
        &self.active
    }

    pub fn supported(&self) -> &[LocaleTag] {
        &self.settings.supported_locales
    }

    /// Switch to `locale` and persist the choice
    pub async fn change_locale(
        &mut self,
        locale: LocaleTag,
        store: &dyn KeyValueStore,
    ) -> Result<()> {
        if !self.settings.is_supported(&locale) {
            return Err(Error::unsupported_locale(locale.to_string()));
        }

        store
            .put(&self.settings.storage_key, locale.to_string())
            .await?;
        info!(from = %self.active, to = %locale, "{}", LOCALE_CHANGED);
        self.active = locale;
        Ok(())
    }
}
