use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, MarkAttendance},
};

impl ApiClient {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get("/attendance").await
    }

    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.post_with_query(
            "/attendance",
            &[("employee_id", employee_id.to_string())],
            payload,
        )
        .await
    }
}
