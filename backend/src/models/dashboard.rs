use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_present_today: usize,
    pub total_absent_today: usize,
    pub attendance_rate: f64,
}

impl DashboardStats {
    /// Rate is present / total * 100, rounded to two decimals. Zero staff
    /// gives a zero rate.
    pub fn new(total_employees: usize, present: usize, absent: usize) -> Self {
        let attendance_rate = if total_employees == 0 {
            0.0
        } else {
            let raw = present as f64 / total_employees as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        };
        Self {
            total_employees,
            total_present_today: present,
            total_absent_today: absent,
            attendance_rate,
        }
    }
}
