use crate::error::StoreError;
use crate::models::{AppSettings, Employee, User};

pub mod json_store;
pub mod memory;

pub use json_store::JsonStateRepository;
pub use memory::MemoryStateRepository;

/// Storage keys shared by every backend; one JSON document per key.
pub const SESSION_KEY: &str = "salario_session";
pub const ROSTER_KEY: &str = "salario_employees";
pub const SETTINGS_KEY: &str = "salario_settings";

/// Persistence seam for the session, roster and settings documents.
///
/// `load_*` distinguishes an absent key (`Ok(None)`) from an unparsable one
/// (`Err(StoreError::Malformed)`); what to do about a bad payload is the
/// caller's policy, not the backend's.
pub trait StateRepository: Send + Sync {
    fn load_session(&self) -> Result<Option<User>, StoreError>;
    fn save_session(&self, user: &User) -> Result<(), StoreError>;
    fn clear_session(&self) -> Result<(), StoreError>;
    fn load_roster(&self) -> Result<Option<Vec<Employee>>, StoreError>;
    fn save_roster(&self, employees: &[Employee]) -> Result<(), StoreError>;
    fn load_settings(&self) -> Result<Option<AppSettings>, StoreError>;
    fn save_settings(&self, settings: &AppSettings) -> Result<(), StoreError>;
}
