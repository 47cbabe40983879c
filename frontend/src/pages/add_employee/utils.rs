use crate::api::{ApiError, Department, NewEmployee};

pub const CREATE_SUCCESS_MESSAGE: &str = "Employee added successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add employee. Please try again.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Raw form inputs. `department` holds the select's value (empty until chosen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    /// Presence check only, like the inputs' `required` attribute. Format
    /// rules are left to the server.
    pub fn validate(&self) -> Result<Department, ApiError> {
        let missing =
            self.employee_id.is_empty() || self.full_name.is_empty() || self.email.is_empty();
        let department = self.department.parse::<Department>().ok();
        match department {
            Some(department) if !missing => Ok(department),
            _ => Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE)),
        }
    }

    /// Text fields are sent trimmed.
    pub fn to_request(&self) -> Result<NewEmployee, ApiError> {
        let department = self.validate()?;
        Ok(NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
