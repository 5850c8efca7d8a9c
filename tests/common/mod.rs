#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sql_exec::{app, AppState, ExecError, Rows, SqlExecutor};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_URL: &str = "postgres://test@localhost/test";

enum Outcome {
    Rows(Rows),
    Fail(String),
}

/// Records every call and answers with a canned outcome.
pub struct MockExecutor {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockExecutor {
    pub fn returning(rows: Rows) -> Arc<Self> {
        Arc::new(MockExecutor {
            outcome: Outcome::Rows(rows),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(MockExecutor {
            outcome: Outcome::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// (database_url, sql) pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for MockExecutor {
    async fn execute(&self, database_url: &str, sql: &str) -> Result<Rows, ExecError> {
        self.calls
            .lock()
            .unwrap()
            .push((database_url.to_string(), sql.to_string()));
        match &self.outcome {
            Outcome::Rows(rows) => Ok(rows.clone()),
            Outcome::Fail(msg) => Err(ExecError::Query(sqlx::Error::Protocol(msg.clone()))),
        }
    }
}

/// Body limit used by every test router.
pub const TEST_BODY_LIMIT: usize = 4096;

pub fn router_with(executor: Arc<dyn SqlExecutor>, database_url: Option<&str>) -> Router {
    let state = AppState::new(database_url.map(str::to_string), executor)
        .with_max_body_bytes(TEST_BODY_LIMIT);
    app(state)
}

pub fn post_json(body: impl Into<String>) -> Request<Body> {
    let body = body.into();
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn assert_cors(&self) {
        assert_eq!(
            self.headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
            "missing allow-origin on {}",
            self.status
        );
        assert_eq!(
            self.headers
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
            "missing allow-methods on {}",
            self.status
        );
        assert_eq!(
            self.headers
                .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
                .and_then(|v| v.to_str().ok()),
            Some("authorization, x-client-info, apikey, content-type"),
            "missing allow-headers on {}",
            self.status
        );
    }
}

pub async fn send(router: Router, req: Request<Body>) -> TestResponse {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body,
    }
}
