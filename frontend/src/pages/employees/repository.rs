use crate::api::{ApiClient, ApiError, Employee};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

/// Deletes by server id and hands the id back for local removal.
pub async fn delete_employee(api: &ApiClient, id: i64) -> Result<i64, ApiError> {
    api.delete_employee(id).await.map(|_| id)
}
