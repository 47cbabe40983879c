use super::{
    client::ApiClient,
    types::{ApiError, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get("/employees").await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        self.post("/employees", payload).await
    }

    /// Deletes by server id, not by business key.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/employees/{}", id)).await
    }
}
