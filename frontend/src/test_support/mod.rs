#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Department, Employee};
    use chrono::{Duration, NaiveDate};
    use serde_json::Value;

    pub fn sample_employee(id: i64) -> Employee {
        let index = usize::try_from(id).unwrap_or(0);
        Employee {
            id,
            employee_id: format!("EMP{:03}", id),
            full_name: format!("Employee {}", id),
            email: format!("emp{:03}@example.com", id),
            department: Department::ALL[index % Department::ALL.len()],
        }
    }

    /// Employees with server ids `1..=count`.
    pub fn sample_employees(count: usize) -> Vec<Employee> {
        (1..=count as i64).map(sample_employee).collect()
    }

    pub fn employees_json(count: usize) -> Value {
        serde_json::to_value(sample_employees(count)).expect("employees json")
    }

    /// `count` records for one employee on consecutive days, alternating status.
    pub fn sample_records(count: usize, employee_id: i64) -> Vec<AttendanceRecord> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        (0..count)
            .map(|offset| AttendanceRecord {
                id: offset as i64 + 1,
                employee_id,
                date: start + Duration::days(offset as i64),
                status: if offset % 2 == 0 {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                },
            })
            .collect()
    }

    pub fn records_json(count: usize, employee_id: i64) -> Value {
        serde_json::to_value(sample_records(count, employee_id)).expect("records json")
    }
}
