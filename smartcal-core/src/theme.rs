//! Persisted light/dark preference.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SmartCalResult;
use crate::storage::{Storage, THEME_KEY, load_record, save_record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub is_dark: bool,
}

pub struct ThemeStore {
    preference: ThemePreference,
    storage: Arc<dyn Storage>,
}

impl ThemeStore {
    pub fn load(storage: Arc<dyn Storage>) -> SmartCalResult<Self> {
        let preference = load_record::<ThemePreference>(storage.as_ref(), THEME_KEY)?.unwrap_or_default();
        Ok(ThemeStore { preference, storage })
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark
    }

    /// Flip the theme and return whether it is now dark.
    pub fn toggle_theme(&mut self) -> SmartCalResult<bool> {
        self.set_dark(!self.preference.is_dark)?;
        Ok(self.preference.is_dark)
    }

    pub fn set_dark(&mut self, is_dark: bool) -> SmartCalResult<()> {
        self.preference.is_dark = is_dark;
        save_record(self.storage.as_ref(), THEME_KEY, &self.preference)
            .inspect_err(|e| warn!(error = %e, "failed to persist theme"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartCalError;
    use crate::storage::{EVENTS_KEY, MemoryStorage};

    #[test]
    fn defaults_to_light() {
        let theme = ThemeStore::load(Arc::new(MemoryStorage::new())).unwrap();
        assert!(!theme.is_dark());
    }

    #[test]
    fn toggle_persists_under_its_own_key() {
        let storage = Arc::new(MemoryStorage::new());
        let mut theme = ThemeStore::load(storage.clone()).unwrap();

        assert!(theme.toggle_theme().unwrap());
        assert!(storage.raw(THEME_KEY).is_some());
        assert!(storage.raw(EVENTS_KEY).is_none());

        let reloaded = ThemeStore::load(storage).unwrap();
        assert!(reloaded.is_dark());
    }

    #[test]
    fn failed_write_keeps_new_preference_in_memory() {
        let storage = Arc::new(MemoryStorage::new());
        let mut theme = ThemeStore::load(storage.clone()).unwrap();
        storage.set_fail_writes(true);

        assert!(matches!(theme.set_dark(true), Err(SmartCalError::Persistence(_))));
        assert!(theme.is_dark());
        assert!(!ThemeStore::load(storage).unwrap().is_dark());
    }
}
