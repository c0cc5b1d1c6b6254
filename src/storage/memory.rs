use std::{collections::HashMap, sync::Mutex};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;
use crate::models::{AppSettings, Employee, User};
use crate::storage::{StateRepository, ROSTER_KEY, SESSION_KEY, SETTINGS_KEY};

/// In-memory stand-in for the persisted store. Keeps the serialized JSON per
/// key exactly like the browser-local store it replaces, so round-trips
/// through it exercise the real wire format.
#[derive(Default)]
pub struct MemoryStateRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON currently stored under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .get(key)
            .cloned()
    }

    /// Plants an arbitrary payload under `key`; lets tests stage pre-existing
    /// or corrupt state.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .insert(key.into(), value.into());
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.lock().expect("entries mutex poisoned");
        let Some(raw) = entries.get(key) else {
            return Ok(None);
        };

        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { key, source })
    }

    fn write_key<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .insert(key.to_string(), serialized);
        Ok(())
    }

    fn remove_key(&self, key: &str) {
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .remove(key);
    }
}

impl StateRepository for MemoryStateRepository {
    fn load_session(&self) -> Result<Option<User>, StoreError> {
        self.read_key(SESSION_KEY)
    }

    fn save_session(&self, user: &User) -> Result<(), StoreError> {
        self.write_key(SESSION_KEY, user)
    }

    fn clear_session(&self) -> Result<(), StoreError> {
        self.remove_key(SESSION_KEY);
        Ok(())
    }

    fn load_roster(&self) -> Result<Option<Vec<Employee>>, StoreError> {
        self.read_key(ROSTER_KEY)
    }

    fn save_roster(&self, employees: &[Employee]) -> Result<(), StoreError> {
        self.write_key(ROSTER_KEY, employees)
    }

    fn load_settings(&self) -> Result<Option<AppSettings>, StoreError> {
        self.read_key(SETTINGS_KEY)
    }

    fn save_settings(&self, settings: &AppSettings) -> Result<(), StoreError> {
        self.write_key(SETTINGS_KEY, settings)
    }
}
