use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "IT")]
    It,
    Sales,
    Marketing,
    Finance,
    Operations,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeePayload {
    #[validate(custom(function = "rules::validate_not_blank"))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub department: Department,
}

impl Employee {
    pub fn from_payload(id: i64, payload: CreateEmployeePayload) -> Self {
        Self {
            id,
            employee_id: payload.employee_id,
            full_name: payload.full_name,
            email: payload.email,
            department: payload.department,
        }
    }
}
