//! Session, roster and settings state for the Salario payroll app, persisted
//! as JSON documents under a per-user data directory.

pub mod error;
pub mod models;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod store;

pub use error::StoreError;
pub use models::{
    ActiveView, AppSettings, Currency, Employee, EmployeeStatus, FinancialStats, User,
};
pub use settings::SettingsStore;
pub use storage::{
    json_store::default_data_dir, JsonStateRepository, MemoryStateRepository, StateRepository,
    ROSTER_KEY, SESSION_KEY, SETTINGS_KEY,
};
pub use store::AppStore;
