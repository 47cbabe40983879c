use crate::api::{ApiClient, ApiError, Employee, NewEmployee};

pub async fn create_employee(api: &ApiClient, payload: NewEmployee) -> Result<Employee, ApiError> {
    api.create_employee(&payload).await
}
