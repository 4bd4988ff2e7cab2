//! Requests sent through the full router against an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{middleware::sharer::SHARER_USER_ID_HEADER, router::router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

fn request(method: Method, uri: &str, user_id: Option<i32>, body: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(SHARER_USER_ID_HEADER, user_id.to_string());
    }

    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn json_request(method: Method, uri: &str, user_id: Option<i32>, body: Value) -> Request<Body> {
    request(method, uri, user_id, Some(body.to_string()))
}

/// Sends one request and returns the status and the parsed JSON body
/// (`Value::Null` for an empty body).
async fn send(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Asserts the `{"error": <message>}` shape and returns the message.
fn error_message(body: &Value) -> &str {
    assert_eq!(body.as_object().map(|o| o.len()), Some(1), "body: {}", body);
    body["error"].as_str().unwrap()
}
