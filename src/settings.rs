use std::sync::Arc;

use tracing::warn;

use crate::error::StoreError;
use crate::models::AppSettings;
use crate::storage::StateRepository;

/// Payroll settings kept alongside the session and roster.
///
/// Unlike the roster, defaults are not written back on first run; the
/// settings key only exists once the user saves a change.
pub struct SettingsStore {
    repo: Arc<dyn StateRepository>,
    settings: AppSettings,
}

impl SettingsStore {
    /// Reads the persisted settings, falling back to defaults when nothing
    /// was saved yet or the payload no longer parses.
    pub fn load(repo: Arc<dyn StateRepository>) -> Result<Self, StoreError> {
        let settings = match repo.load_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(StoreError::Malformed { key, source }) => {
                warn!(key, error = %source, "discarding malformed settings; using defaults");
                AppSettings::default()
            }
            Err(err) => return Err(err),
        };

        Ok(Self { repo, settings })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.settings.currency.symbol()
    }

    /// Persists `settings` and swaps them in once the write succeeded.
    pub fn update(&mut self, settings: AppSettings) -> Result<(), StoreError> {
        self.repo.save_settings(&settings)?;
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use crate::storage::{MemoryStateRepository, SETTINGS_KEY};

    #[test]
    fn defaults_when_nothing_is_saved() {
        let repo = Arc::new(MemoryStateRepository::new());
        let store =
            SettingsStore::load(Arc::clone(&repo) as Arc<dyn StateRepository>).expect("load");

        assert_eq!(store.settings(), &AppSettings::default());
        assert_eq!(store.currency_symbol(), "$");
        // Defaults are not persisted until the user changes something.
        assert!(repo.raw(SETTINGS_KEY).is_none());
    }

    #[test]
    fn update_persists_and_survives_a_reload() {
        let repo = Arc::new(MemoryStateRepository::new());
        let mut store =
            SettingsStore::load(Arc::clone(&repo) as Arc<dyn StateRepository>).expect("load");

        let revised = AppSettings {
            monthly_budget: 80_000.0,
            tax_rate: 18.0,
            currency: Currency::Inr,
        };
        store.update(revised.clone()).expect("update");
        assert_eq!(store.currency_symbol(), "\u{20b9}");

        let reloaded =
            SettingsStore::load(Arc::clone(&repo) as Arc<dyn StateRepository>).expect("reload");
        assert_eq!(reloaded.settings(), &revised);
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let repo = Arc::new(MemoryStateRepository::new());
        repo.set_raw(SETTINGS_KEY, "{\"currency\": 7}");

        let store =
            SettingsStore::load(Arc::clone(&repo) as Arc<dyn StateRepository>).expect("load");
        assert_eq!(store.settings(), &AppSettings::default());
    }
}
