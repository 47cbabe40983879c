pub mod add_employee;
pub mod attendance;
pub mod dashboard;
pub mod employees;

pub use add_employee::AddEmployeePage;
pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
