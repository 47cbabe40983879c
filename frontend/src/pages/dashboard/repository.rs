use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, DashboardStats, Employee};

/// Preview size of the "Recent Employees" table. Relies on backend ordering.
pub const RECENT_EMPLOYEE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent_employees: Vec<Employee>,
}

/// Stats and employees are requested together; either failure fails the load.
pub async fn fetch_dashboard(api: &ApiClient) -> Result<DashboardSnapshot, ApiError> {
    let (stats, mut employees) =
        futures::try_join!(api.get_dashboard_stats(), api.list_employees())?;
    employees.truncate(RECENT_EMPLOYEE_LIMIT);
    Ok(DashboardSnapshot {
        stats,
        recent_employees: employees,
    })
}
