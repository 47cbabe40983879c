#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn employee_json(id: i64, business_id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": business_id,
        "full_name": name,
        "email": format!("{}@example.com", business_id.to_lowercase()),
        "department": "IT"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn list_employees_decodes_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!([
            employee_json(1, "EMP001", "Ada Lovelace"),
            employee_json(2, "EMP002", "Alan Turing")
        ]));
    });

    let employees = api_client(&server).list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].employee_id, "EMP002");
    assert_eq!(employees[1].department, Department::It);
}

#[tokio::test]
async fn create_employee_posts_the_four_business_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(201)
            .json_body(employee_json(9, "EMP009", "Grace Hopper"));
    });

    let payload = NewEmployee {
        employee_id: "EMP009".into(),
        full_name: "Grace Hopper".into(),
        email: "emp009@example.com".into(),
        department: Department::It,
    };
    let created = api_client(&server).create_employee(&payload).await.unwrap();
    assert_eq!(created.id, 9);

    let calls = server.received(&POST, "/api/employees");
    assert_eq!(calls.len(), 1);
    let body = calls[0].body.clone().expect("json body");
    assert_eq!(
        body,
        json!({
            "employee_id": "EMP009",
            "full_name": "Grace Hopper",
            "email": "emp009@example.com",
            "department": "IT"
        })
    );
}

#[tokio::test]
async fn delete_employee_targets_server_id_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/7");
        then.status(204);
    });

    api_client(&server).delete_employee(7).await.unwrap();
    assert_eq!(server.hits(&DELETE, "/api/employees/7"), 1);
    assert_eq!(server.total_hits(), 1);
}

#[tokio::test]
async fn mark_attendance_sends_employee_as_query_parameter() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance");
        then.status(200).json_body(json!({
            "id": 1,
            "employee_id": 3,
            "date": "2025-05-02",
            "status": "Absent"
        }));
    });

    let payload = MarkAttendance {
        date: "2025-05-02".into(),
        status: AttendanceStatus::Absent,
    };
    let record = api_client(&server)
        .mark_attendance(3, &payload)
        .await
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Absent);

    let calls = server.received(&POST, "/api/attendance");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query.as_deref(), Some("employee_id=3"));
    assert_eq!(
        calls[0].body,
        Some(json!({ "date": "2025-05-02", "status": "Absent" }))
    );
}

#[tokio::test]
async fn dashboard_stats_with_missing_fields_stays_absent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(200).json_body(json!({ "total_employees": 4 }));
    });

    let stats = api_client(&server).get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_employees, Some(4));
    assert_eq!(stats.total_present_today, None);
    assert_eq!(stats.attendance_rate, None);
}

#[tokio::test]
async fn error_responses_carry_status_and_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance");
        then.status(400)
            .json_body(json!({ "detail": "Attendance already marked" }));
    });

    let err = api_client(&server)
        .mark_attendance(
            1,
            &MarkAttendance {
                date: "2025-05-02".into(),
                status: AttendanceStatus::Present,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_ERROR");
    assert_eq!(err.status, Some(400));
    assert_eq!(err.detail.as_deref(), Some("Attendance already marked"));
}

#[tokio::test]
async fn error_without_detail_keeps_status_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(502);
    });

    let err = api_client(&server).list_employees().await.unwrap_err();
    assert_eq!(err.status, Some(502));
    assert!(err.detail.is_none());
}

#[tokio::test]
async fn unreachable_route_is_reported_as_transport_failure() {
    let server = MockServer::start();
    let err = api_client(&server).list_attendance().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.status.is_none());
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.status(200).json_body(json!({ "not": "a list" }));
    });

    let err = api_client(&server).list_attendance().await.unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}
