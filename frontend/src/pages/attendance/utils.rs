use crate::{
    api::{ApiError, AttendanceRecord, AttendanceStatus, Employee, MarkAttendance},
    utils::{messages::MessageState, time::today_input_value},
};
use std::collections::HashMap;

pub const RECENT_RECORD_LIMIT: usize = 10;
pub const SUCCESS_CLEAR_DELAY_MS: u32 = 3000;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Is the backend running?";
pub const SELECT_EMPLOYEE_MESSAGE: &str = "Please select an employee";
pub const MARK_SUCCESS_MESSAGE: &str = "Attendance marked successfully!";
pub const MARK_FAILED_MESSAGE: &str = "Failed to mark attendance";

/// `employee` is the select's value: the server id as text, empty when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub employee: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self {
            employee: String::new(),
            date: today_input_value(),
            status: AttendanceStatus::Present,
        }
    }
}

impl AttendanceFormState {
    /// Only the employee selection is checked here. Date and status are
    /// constrained by their inputs.
    pub fn to_request(&self) -> Result<(i64, MarkAttendance), ApiError> {
        let employee_id = self
            .employee
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::validation(SELECT_EMPLOYEE_MESSAGE))?;
        Ok((
            employee_id,
            MarkAttendance {
                date: self.date.clone(),
                status: self.status,
            },
        ))
    }
}

/// Applies a submission outcome to the banners. Returns whether the register
/// should be reloaded. The form itself is left as is either way.
pub fn apply_mark_result(
    messages: &mut MessageState,
    result: &Result<AttendanceRecord, ApiError>,
) -> bool {
    match result {
        Ok(_) => {
            messages.set_success(MARK_SUCCESS_MESSAGE);
            true
        }
        Err(err) => {
            messages.set_error(err.detail_or(MARK_FAILED_MESSAGE));
            false
        }
    }
}

pub fn employee_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

/// Server id to display label, built once per register load.
#[derive(Debug, Clone, Default)]
pub struct EmployeeIndex {
    labels: HashMap<i64, String>,
}

impl EmployeeIndex {
    pub fn new(employees: &[Employee]) -> Self {
        Self {
            labels: employees
                .iter()
                .map(|employee| (employee.id, employee_label(employee)))
                .collect(),
        }
    }

    /// Falls back to the raw id for records whose employee is gone.
    pub fn label(&self, employee_id: i64) -> String {
        self.labels
            .get(&employee_id)
            .cloned()
            .unwrap_or_else(|| format!("ID: {}", employee_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: i64,
    pub employee: String,
    pub date: String,
    pub status: AttendanceStatus,
}

/// First `RECENT_RECORD_LIMIT` records in backend order.
pub fn build_record_rows(records: &[AttendanceRecord], index: &EmployeeIndex) -> Vec<RecordRow> {
    records
        .iter()
        .take(RECENT_RECORD_LIMIT)
        .map(|record| RecordRow {
            id: record.id,
            employee: index.label(record.employee_id),
            date: record.date.format("%Y-%m-%d").to_string(),
            status: record.status,
        })
        .collect()
}

pub fn overflow_notice(total: usize) -> Option<String> {
    (total > RECENT_RECORD_LIMIT)
        .then(|| format!("Showing last {} of {} records", RECENT_RECORD_LIMIT, total))
}
