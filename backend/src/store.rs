//! In-memory HR records. Lost on restart.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{
    attendance::{AttendanceRecord, AttendanceStatus, MarkAttendancePayload},
    dashboard::DashboardStats,
    employee::{CreateEmployeePayload, Employee},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Employee ID '{0}' already exists")]
    DuplicateEmployeeId(String),
    #[error("Email '{0}' already exists")]
    DuplicateEmail(String),
    #[error("Employee not found")]
    EmployeeNotFound,
}

#[derive(Debug)]
struct Inner {
    employees: BTreeMap<i64, Employee>,
    attendance: Vec<AttendanceRecord>,
    next_employee_id: i64,
}

#[derive(Debug)]
pub struct HrStore {
    inner: RwLock<Inner>,
}

impl Default for HrStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HrStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                employees: BTreeMap::new(),
                attendance: Vec::new(),
                next_employee_id: 1,
            }),
        }
    }

    pub async fn create_employee(
        &self,
        payload: CreateEmployeePayload,
    ) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        for existing in inner.employees.values() {
            if existing.employee_id == payload.employee_id {
                return Err(StoreError::DuplicateEmployeeId(payload.employee_id));
            }
            if existing.email == payload.email {
                return Err(StoreError::DuplicateEmail(payload.email));
            }
        }

        let id = inner.next_employee_id;
        inner.next_employee_id += 1;
        let employee = Employee::from_payload(id, payload);
        inner.employees.insert(id, employee.clone());
        Ok(employee)
    }

    /// Ascending server id, which is also creation order.
    pub async fn list_employees(&self) -> Vec<Employee> {
        self.inner.read().await.employees.values().cloned().collect()
    }

    /// Attendance of the removed employee is kept.
    pub async fn delete_employee(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::EmployeeNotFound)
    }

    /// Upserts on (employee, date): a second mark for the same day replaces
    /// the status of the existing record.
    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        payload: MarkAttendancePayload,
    ) -> Result<AttendanceRecord, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.employees.contains_key(&employee_id) {
            return Err(StoreError::EmployeeNotFound);
        }

        if let Some(existing) = inner
            .attendance
            .iter_mut()
            .find(|record| record.employee_id == employee_id && record.date == payload.date)
        {
            existing.status = payload.status;
            return Ok(existing.clone());
        }

        let record = AttendanceRecord {
            id: inner.attendance.len() as i64 + 1,
            employee_id,
            date: payload.date,
            status: payload.status,
        };
        inner.attendance.push(record.clone());
        Ok(record)
    }

    /// Insertion order.
    pub async fn list_attendance(&self) -> Vec<AttendanceRecord> {
        self.inner.read().await.attendance.clone()
    }

    pub async fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let inner = self.inner.read().await;
        let (present, absent) = inner
            .attendance
            .iter()
            .filter(|record| record.date == today)
            .fold((0, 0), |(present, absent), record| match record.status {
                AttendanceStatus::Present => (present + 1, absent),
                AttendanceStatus::Absent => (present, absent + 1),
            });
        DashboardStats::new(inner.employees.len(), present, absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Department;

    fn employee(business_id: &str, email: &str) -> CreateEmployeePayload {
        CreateEmployeePayload {
            employee_id: business_id.to_string(),
            full_name: format!("Name {}", business_id),
            email: email.to_string(),
            department: Department::Sales,
        }
    }

    fn mark(date: NaiveDate, status: AttendanceStatus) -> MarkAttendancePayload {
        MarkAttendancePayload { date, status }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = HrStore::new();
        let a = store.create_employee(employee("E1", "e1@x.io")).await.unwrap();
        let b = store.create_employee(employee("E2", "e2@x.io")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        let ids: Vec<i64> = store.list_employees().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn duplicates_are_rejected() {
        let store = HrStore::new();
        store.create_employee(employee("E1", "e1@x.io")).await.unwrap();
        assert_eq!(
            store.create_employee(employee("E1", "other@x.io")).await,
            Err(StoreError::DuplicateEmployeeId("E1".into()))
        );
        assert_eq!(
            store.create_employee(employee("E9", "e1@x.io")).await,
            Err(StoreError::DuplicateEmail("e1@x.io".into()))
        );
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = HrStore::new();
        store.create_employee(employee("E1", "e1@x.io")).await.unwrap();
        store.delete_employee(1).await.unwrap();
        let next = store.create_employee(employee("E2", "e2@x.io")).await.unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(store.delete_employee(1).await, Err(StoreError::EmployeeNotFound));
    }

    #[tokio::test]
    async fn marking_twice_updates_in_place() {
        let store = HrStore::new();
        store.create_employee(employee("E1", "e1@x.io")).await.unwrap();
        let first = store.mark_attendance(1, mark(day(1), AttendanceStatus::Present)).await.unwrap();
        let second = store.mark_attendance(1, mark(day(1), AttendanceStatus::Absent)).await.unwrap();
        assert_eq!(first.id, second.id);
        let records = store.list_attendance().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn marking_unknown_employee_fails() {
        let store = HrStore::new();
        assert_eq!(
            store.mark_attendance(5, mark(day(1), AttendanceStatus::Present)).await,
            Err(StoreError::EmployeeNotFound)
        );
    }

    #[tokio::test]
    async fn delete_keeps_attendance_history() {
        let store = HrStore::new();
        store.create_employee(employee("E1", "e1@x.io")).await.unwrap();
        store.mark_attendance(1, mark(day(2), AttendanceStatus::Present)).await.unwrap();
        store.delete_employee(1).await.unwrap();
        assert_eq!(store.list_attendance().await.len(), 1);
    }

    #[tokio::test]
    async fn stats_count_only_the_given_day() {
        let store = HrStore::new();
        for n in 1..=4 {
            store
                .create_employee(employee(&format!("E{}", n), &format!("e{}@x.io", n)))
                .await
                .unwrap();
        }
        store.mark_attendance(1, mark(day(3), AttendanceStatus::Present)).await.unwrap();
        store.mark_attendance(2, mark(day(3), AttendanceStatus::Present)).await.unwrap();
        store.mark_attendance(3, mark(day(3), AttendanceStatus::Absent)).await.unwrap();
        store.mark_attendance(4, mark(day(2), AttendanceStatus::Present)).await.unwrap();

        let stats = store.dashboard_stats(day(3)).await;
        assert_eq!(stats.total_employees, 4);
        assert_eq!(stats.total_present_today, 2);
        assert_eq!(stats.total_absent_today, 1);
        assert_eq!(stats.attendance_rate, 50.0);
    }
}
