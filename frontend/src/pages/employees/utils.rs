use crate::api::Employee;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch employees. Is the backend running?";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this employee?";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee";

/// Drops the row with server id `id`. Other rows keep their order.
pub fn remove_employee(employees: &mut Vec<Employee>, id: i64) {
    employees.retain(|employee| employee.id != id);
}
