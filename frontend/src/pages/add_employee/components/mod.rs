pub mod form;

pub use form::EmployeeForm;
