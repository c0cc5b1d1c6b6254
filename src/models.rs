use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated identity. At most one is active at a time; `password` is
/// carried opaquely for the auth flow and never read back by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
            password: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// One roster entry. `id` is caller-assigned and unique within the roster;
/// the collection is ordered most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub monthly_income: f64,
    pub date_joined: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Caller-side helper for new hires: mints a fresh id and stamps
    /// `date_joined` with the current date. The store never assigns ids.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        monthly_income: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.into(),
            email: email.into(),
            position: position.into(),
            monthly_income,
            date_joined: today(),
            status: EmployeeStatus::Active,
        }
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default)]
    pub currency: Currency,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            monthly_budget: default_monthly_budget(),
            tax_rate: default_tax_rate(),
            currency: Currency::default(),
        }
    }
}

fn default_monthly_budget() -> f64 {
    50_000.0
}

fn default_tax_rate() -> f64 {
    10.0
}

/// Dashboard figures derived from a roster snapshot; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    pub total_expenditure: f64,
    pub remaining_budget: f64,
    pub employee_count: usize,
    pub average_salary: f64,
}

impl FinancialStats {
    pub fn from_roster(employees: &[Employee], settings: &AppSettings) -> Self {
        let total_expenditure: f64 = employees.iter().map(|e| e.monthly_income).sum();
        let employee_count = employees.len();
        let average_salary = if employee_count == 0 {
            0.0
        } else {
            total_expenditure / employee_count as f64
        };

        Self {
            total_expenditure,
            remaining_budget: settings.monthly_budget - total_expenditure,
            employee_count,
            average_salary,
        }
    }
}

/// View selection the sidebar drives; the store resets it on logout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    Dashboard,
    Analytics,
    Employees,
    Payroll,
    Settings,
}

impl Default for ActiveView {
    fn default() -> Self {
        Self::Dashboard
    }
}
