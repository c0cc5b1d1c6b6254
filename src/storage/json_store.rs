use std::{fs, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;
use crate::models::{AppSettings, Employee, User};
use crate::storage::{StateRepository, ROSTER_KEY, SESSION_KEY, SETTINGS_KEY};

/// File-backed repository: each storage key maps to `<base_dir>/<key>.json`,
/// written atomically through a sibling tmp file. A missing or blank file is
/// an absent key, not an error.
#[derive(Clone)]
pub struct JsonStateRepository {
    base_dir: PathBuf,
}

impl JsonStateRepository {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { key, source })
    }

    fn write_key<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        self.ensure_base_dir()?;
        let path = self.key_path(key);
        let tmp_path = path.with_extension("tmp");

        let serialized =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode { key, source })?;
        fs::write(&tmp_path, serialized).map_err(|source| StoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| StoreError::Write { path, source })?;

        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|source| StoreError::Write { path, source })
    }

    fn ensure_base_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir).map_err(|source| StoreError::Write {
            path: self.base_dir.clone(),
            source,
        })
    }
}

impl StateRepository for JsonStateRepository {
    fn load_session(&self) -> Result<Option<User>, StoreError> {
        self.read_key(SESSION_KEY)
    }

    fn save_session(&self, user: &User) -> Result<(), StoreError> {
        self.write_key(SESSION_KEY, user)
    }

    fn clear_session(&self) -> Result<(), StoreError> {
        self.remove_key(SESSION_KEY)
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

/// Platform-local data directory for the app; `.salario` under the working
/// directory when the platform offers none.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = dirs::data_local_dir() {
        return dir.join("salario");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".salario")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::seed::default_roster;

    fn repo() -> (TempDir, JsonStateRepository) {
        let dir = TempDir::new().expect("temp dir");
        let repo = JsonStateRepository::new(dir.path().to_path_buf());
        (dir, repo)
    }

    #[test]
    fn absent_keys_read_as_none() {
        let (_dir, repo) = repo();
        assert!(repo.load_session().expect("load session").is_none());
        assert!(repo.load_roster().expect("load roster").is_none());
        assert!(repo.load_settings().expect("load settings").is_none());
    }

    #[test]
    fn roster_round_trips_through_disk() {
        let (_dir, repo) = repo();
        let roster = default_roster();

        repo.save_roster(&roster).expect("save roster");
        let loaded = repo.load_roster().expect("load roster").expect("roster present");
        assert_eq!(loaded, roster);
    }

    #[test]
    fn clear_session_removes_the_document_and_stays_idempotent() {
        let (dir, repo) = repo();
        let user = User::new("connor", "sarah@sky.net");

        repo.save_session(&user).expect("save session");
        assert!(dir.path().join("salario_session.json").exists());

        repo.clear_session().expect("clear session");
        assert!(!dir.path().join("salario_session.json").exists());
        assert!(repo.load_session().expect("load session").is_none());

        repo.clear_session().expect("clear twice");
    }

    #[test]
    fn malformed_document_reports_the_key() {
        let (dir, repo) = repo();
        std::fs::write(dir.path().join("salario_employees.json"), "{ not json")
            .expect("plant garbage");

        let error = repo.load_roster().expect_err("should refuse garbage");
        assert!(matches!(error, StoreError::Malformed { key: ROSTER_KEY, .. }));
    }

    #[test]
    fn blank_document_reads_as_none() {
        let (dir, repo) = repo();
        std::fs::write(dir.path().join("salario_employees.json"), "  \n").expect("plant blank");
        assert!(repo.load_roster().expect("load roster").is_none());
    }

    #[test]
    fn default_data_dir_ends_in_a_salario_directory() {
        let dir = default_data_dir();
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        assert!(name == "salario" || name == ".salario", "got {name}");
    }

    #[test]
    fn writes_leave_no_tmp_residue() {
        let (dir, repo) = repo();
        repo.save_roster(&default_roster()).expect("save roster");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
