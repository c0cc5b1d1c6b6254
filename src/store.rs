use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{ActiveView, Employee, User};
use crate::seed;
use crate::storage::StateRepository;

/// Session and employee roster state for one running app instance.
///
/// The store is created empty and hydrated once via [`AppStore::load`]; until
/// then [`AppStore::is_ready`] reports `false` and the in-memory state is the
/// logged-out default. Every mutation persists through the repository before
/// the in-memory copy changes, so a failed write leaves the store on its
/// previous state.
pub struct AppStore {
    repo: Arc<dyn StateRepository>,
    seed: Vec<Employee>,
    current_user: Option<User>,
    employees: Vec<Employee>,
    active_view: ActiveView,
    ready: bool,
}

impl AppStore {
    pub fn new(repo: Arc<dyn StateRepository>) -> Self {
        Self::with_seed(repo, seed::default_roster())
    }

    /// Same as [`AppStore::new`] but with a caller-supplied first-run roster.
    pub fn with_seed(repo: Arc<dyn StateRepository>, seed: Vec<Employee>) -> Self {
        Self {
            repo,
            seed,
            current_user: None,
            employees: Vec::new(),
            active_view: ActiveView::default(),
            ready: false,
        }
    }

    /// Hydrates session and roster from the repository. Runs once; later
    /// calls return without touching storage.
    ///
    /// A payload that no longer parses is discarded with a warning and the
    /// affected slice of state falls back to its default (logged out, seeded
    /// roster). I/O failures are returned as-is and leave the store not ready.
    pub fn load(&mut self) -> Result<(), StoreError> {
        if self.ready {
            return Ok(());
        }

        self.current_user = match self.repo.load_session() {
            Ok(user) => user,
            Err(StoreError::Malformed { key, source }) => {
                warn!(key, error = %source, "discarding malformed session; starting logged out");
                self.repo.clear_session()?;
                None
            }
            Err(err) => return Err(err),
        };

        self.employees = match self.repo.load_roster() {
            Ok(Some(employees)) => employees,
            Ok(None) => self.seed_roster()?,
            Err(StoreError::Malformed { key, source }) => {
                warn!(key, error = %source, "discarding malformed roster; reseeding");
                self.seed_roster()?
            }
            Err(err) => return Err(err),
        };

        self.ready = true;
        Ok(())
    }

    fn seed_roster(&self) -> Result<Vec<Employee>, StoreError> {
        self.repo.save_roster(&self.seed)?;
        info!(count = self.seed.len(), "seeded employee roster");
        Ok(self.seed.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Opens a session for `user`, replacing any current one.
    pub fn login(&mut self, user: User) -> Result<(), StoreError> {
        self.repo.save_session(&user)?;
        debug!(user = %user.username, "session opened");
        self.current_user = Some(user);
        Ok(())
    }

    /// Ends the current session and returns the view to the dashboard.
    /// Calling while logged out does nothing.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        if self.current_user.is_none() {
            return Ok(());
        }

        self.repo.clear_session()?;
        self.current_user = None;
        self.active_view = ActiveView::default();
        debug!("session closed");
        Ok(())
    }

    /// Adds `employee` at the front of the roster.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        let mut next = Vec::with_capacity(self.employees.len() + 1);
        next.push(employee);
        next.extend(self.employees.iter().cloned());

        self.repo.save_roster(&next)?;
        self.employees = next;
        Ok(())
    }

    /// Replaces the roster entry whose id matches `employee.id`, keeping its
    /// position. An id not in the roster is ignored and nothing is written.
    pub fn update_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        let mut next = self.employees.clone();
        let Some(entry) = next.iter_mut().find(|e| e.id == employee.id) else {
            debug!(id = %employee.id, "update target not in roster; ignoring");
            return Ok(());
        };
        *entry = employee;

        self.repo.save_roster(&next)?;
        self.employees = next;
        Ok(())
    }

    /// Removes the roster entry with `id`. Unknown ids are ignored and
    /// nothing is written.
    pub fn delete_employee(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.employees.clone();
        next.retain(|e| e.id != id);
        if next.len() == self.employees.len() {
            return Ok(());
        }

        self.repo.save_roster(&next)?;
        self.employees = next;
        Ok(())
    }
}
