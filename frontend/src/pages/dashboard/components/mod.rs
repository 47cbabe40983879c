pub mod metrics;
pub mod recent_employees;

pub use metrics::MetricsGrid;
pub use recent_employees::RecentEmployees;
