//! Wiremock fixtures for list endpoints.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Project records with ids from `ids`.
pub fn projects(ids: std::ops::RangeInclusive<u32>) -> Vec<Value> {
    ids.map(|id| {
        json!({
            "id": id,
            "title": format!("Project {}", id),
            "status": "active",
            "mentorName": "Dr. Rahimova"
        })
    })
    .collect()
}

/// Task records with ids from `ids`.
pub fn tasks(ids: std::ops::RangeInclusive<u32>) -> Vec<Value> {
    ids.map(|id| {
        json!({
            "id": id,
            "title": format!("Task {}", id),
            "status": "todo",
            "deadline": "2026-11-01T12:00:00Z"
        })
    })
    .collect()
}

/// `{"items": [...], "total": n}` envelope.
pub fn page_body(items: Vec<Value>, total: i64) -> Value {
    json!({ "items": items, "total": total })
}

/// Serve `body` for `GET /api<endpoint>?page=<page>&pageSize=<size>`.
pub async fn mount_page(
    server: &MockServer,
    endpoint: &str,
    page: u64,
    page_size: u64,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api{}", endpoint)))
        .and(query_param("page", page.to_string()))
        .and(query_param("pageSize", page_size.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
