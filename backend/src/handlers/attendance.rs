use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::{
    error::AppError,
    models::attendance::{AttendanceRecord, MarkAttendancePayload, MarkAttendanceQuery},
    state::AppState,
};

pub async fn list_attendance(State(state): State<AppState>) -> Json<Vec<AttendanceRecord>> {
    Json(state.store.list_attendance().await)
}

/// `employee_id` travels in the query string; the body carries date and status.
pub async fn mark_attendance(
    State(state): State<AppState>,
    query: Result<Query<MarkAttendanceQuery>, QueryRejection>,
    payload: Result<Json<MarkAttendancePayload>, JsonRejection>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let Query(MarkAttendanceQuery { employee_id }) = query?;
    let Json(payload) = payload?;

    let record = state.store.mark_attendance(employee_id, payload).await?;
    tracing::info!(
        employee_id,
        date = %record.date,
        status = ?record.status,
        "Attendance marked"
    );
    Ok(Json(record))
}
