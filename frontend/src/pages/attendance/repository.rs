use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, MarkAttendance};

/// Everything the register view needs, loaded as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRegister {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
}

pub async fn fetch_register(api: &ApiClient) -> Result<AttendanceRegister, ApiError> {
    let (employees, records) = futures::try_join!(api.list_employees(), api.list_attendance())?;
    Ok(AttendanceRegister { employees, records })
}

pub async fn mark_attendance(
    api: &ApiClient,
    employee_id: i64,
    payload: MarkAttendance,
) -> Result<AttendanceRecord, ApiError> {
    api.mark_attendance(employee_id, &payload).await
}
