use crate::models::{Employee, EmployeeStatus};

/// Roster a fresh install starts with. The store takes it as a parameter
/// (`AppStore::with_seed`) so embedders can supply their own first-run data.
pub fn default_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            full_name: "Sarah Connor".to_string(),
            email: "sarah@sky.net".to_string(),
            position: "Lead Developer".to_string(),
            monthly_income: 8500.0,
            date_joined: "2023-01-15".to_string(),
            status: EmployeeStatus::Active,
        },
        Employee {
            id: "2".to_string(),
            full_name: "James Bond".to_string(),
            email: "007@mi6.gov".to_string(),
            position: "Security Specialist".to_string(),
            monthly_income: 7200.0,
            date_joined: "2023-03-10".to_string(),
            status: EmployeeStatus::Active,
        },
        Employee {
            id: "3".to_string(),
            full_name: "Ellen Ripley".to_string(),
            email: "ripley@weyland.com".to_string(),
            position: "Operations Manager".to_string(),
            monthly_income: 9000.0,
            date_joined: "2023-05-22".to_string(),
            status: EmployeeStatus::OnLeave,
        },
    ]
}
