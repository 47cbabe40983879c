use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::employee::{CreateEmployeePayload, Employee},
    state::AppState,
    validation::ValidatedJson,
};

pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.store.list_employees().await)
}

pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeePayload>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = state.store.create_employee(payload).await?;
    tracing::info!(
        id = employee.id,
        employee_id = %employee.employee_id,
        department = %employee.department,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.store.delete_employee(id).await?;
    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
