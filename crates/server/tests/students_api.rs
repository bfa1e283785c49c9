use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{startup::build_app, ServerState};

fn app() -> Router {
    build_app(ServerState::in_memory())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn student(name: &str, course: &str) -> Value {
    json!({"name": name, "email": "someone@example.com", "course": course, "age": 20})
}

fn sorted_names(list: &Value) -> Vec<String> {
    let mut names: Vec<String> = list
        .as_array()
        .map(|a| a.iter().filter_map(|s| s["name"].as_str().map(String::from)).collect())
        .unwrap_or_default();
    names.sort();
    names
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/students/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn crud_lifecycle() -> anyhow::Result<()> {
    let app = app();

    let (status, created) = send(&app, "POST", "/api/students", Some(student("Alice Smith", "Math"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, "GET", &format!("/api/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut changed = student("Alice Jones", "Physics");
    changed["age"] = json!(21);
    let (status, updated) = send(&app, "PUT", &format!("/api/students/{id}"), Some(changed)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Alice Jones");
    assert_eq!(updated["course"], "Physics");
    assert_eq!(updated["age"], 21);

    let (status, list) = send(&app, "GET", "/api/students", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/api/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_404_on_every_verb() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/students/missing", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (status, _) = send(&app, "PUT", "/api/students/missing", Some(student("Nobody", "None"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/students/missing", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_input_is_rejected() -> anyhow::Result<()> {
    let app = app();
    let mut bad_age = student("Young One", "Math");
    bad_age["age"] = json!(12);
    let (status, body) = send(&app, "POST", "/api/students", Some(bad_age)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let mut bad_email = student("Proper Name", "Math");
    bad_email["email"] = json!("not-an-email");
    let (status, _) = send(&app, "POST", "/api/students", Some(bad_email)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, "GET", "/api/students", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn search_by_name_and_course() -> anyhow::Result<()> {
    let app = app();
    for (name, course) in [("Alice", "Math"), ("kalish", "Physics"), ("Bob", "Kalimba")] {
        let (status, _) = send(&app, "POST", "/api/students", Some(student(name, course))).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, hits) = send(&app, "GET", "/api/students/search?q=ali", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted_names(&hits), vec!["Alice", "kalish"]);

    for uri in ["/api/students/search", "/api/students/search?q=", "/api/students/search?q=%20%20"] {
        let (_, all) = send(&app, "GET", uri, None).await?;
        assert_eq!(sorted_names(&all), vec!["Alice", "Bob", "kalish"], "{uri}");
    }

    let (status, hits) = send(&app, "GET", "/api/students/search/course?q=KALI", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted_names(&hits), vec!["Bob"]);
    Ok(())
}

#[tokio::test]
async fn stats_summarise_collection() -> anyhow::Result<()> {
    let app = app();
    let (_, empty) = send(&app, "GET", "/api/students/stats", None).await?;
    assert_eq!(empty, json!({"total": 0, "courses": 0, "average_age": 0}));

    send(&app, "POST", "/api/students", Some(student("Alice", "Math"))).await?;
    send(&app, "POST", "/api/students", Some(student("Bobby", "Math"))).await?;
    let (status, stats) = send(&app, "GET", "/api/students/stats", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats, json!({"total": 2, "courses": 1, "average_age": 20}));
    Ok(())
}
