use crate::api::{ApiError, DashboardStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricTone {
    Neutral,
    Present,
    Absent,
    Rate,
}

impl MetricTone {
    pub fn accent_class(&self) -> &'static str {
        match self {
            MetricTone::Neutral => "border-l-4 border-action-primary-bg",
            MetricTone::Present => "border-l-4 border-status-success-border",
            MetricTone::Absent => "border-l-4 border-status-error-border",
            MetricTone::Rate => "border-l-4 border-status-warning-border",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub tone: MetricTone,
}

pub fn format_count(value: Option<i64>) -> String {
    value.unwrap_or(0).to_string()
}

/// Percentage text. Missing or non-finite rates show as `0%`; whole numbers
/// drop the fraction.
pub fn format_rate(rate: Option<f64>) -> String {
    let rate = rate.filter(|value| value.is_finite()).unwrap_or(0.0);
    if rate.fract() == 0.0 {
        format!("{:.0}%", rate)
    } else {
        format!("{}%", rate)
    }
}

pub fn build_metric_cards(stats: &DashboardStats) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Total Employees",
            value: format_count(stats.total_employees),
            tone: MetricTone::Neutral,
        },
        MetricCard {
            label: "Present Today",
            value: format_count(stats.total_present_today),
            tone: MetricTone::Present,
        },
        MetricCard {
            label: "Absent Today",
            value: format_count(stats.total_absent_today),
            tone: MetricTone::Absent,
        },
        MetricCard {
            label: "Attendance Rate",
            value: format_rate(stats.attendance_rate),
            tone: MetricTone::Rate,
        },
    ]
}

/// Single banner for any dashboard load failure, with the base URL appended
/// for operators.
pub fn dashboard_error_message(err: &ApiError, api_base_url: &str) -> String {
    let message = match &err.detail {
        Some(detail) => format!("Failed to load dashboard data: {}", detail),
        None => {
            let status = err
                .status
                .map(|code| format!("Status: {}. ", code))
                .unwrap_or_default();
            format!("Failed to load dashboard data. {}Check backend or CORS.", status)
        }
    };
    format!("{} API: {}", message, api_base_url)
}
