#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use hrms_lite_backend::{app, config::Config, state::AppState};

pub fn test_app() -> Router {
    app(AppState::new(Config::default()))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("call app");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("build POST request");
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("build DELETE request");
    send(app, request).await
}

pub fn employee_body(n: u32, department: &str) -> Value {
    json!({
        "employee_id": format!("EMP{:03}", n),
        "full_name": format!("Employee {}", n),
        "email": format!("emp{:03}@example.com", n),
        "department": department,
    })
}

/// Creates an employee and returns its server id.
pub async fn seed_employee(app: &Router, n: u32) -> i64 {
    let (status, body) = post_json(app, "/api/employees", employee_body(n, "IT")).await;
    assert_eq!(status, StatusCode::CREATED, "seed employee: {}", body);
    body["id"].as_i64().expect("employee id")
}

pub async fn mark(app: &Router, employee_id: i64, date: &str, status: &str) -> (StatusCode, Value) {
    post_json(
        app,
        &format!("/api/attendance?employee_id={}", employee_id),
        json!({ "date": date, "status": status }),
    )
    .await
}
