//! SQL exec handlers: run the posted SQL, answer CORS preflight.

use crate::config::DATABASE_URL_VAR;
use crate::error::ExecError;
use crate::response::exec_success;
use crate::service::Rows;
use crate::state::AppState;
use axum::{body::Body, extract::State, response::IntoResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExecRequest {
    pub sql: String,
}

/// POST / — execute `{ "sql": ... }` verbatim and return the rows.
/// Every failure is a 500 `{ "error": message }`, including an oversized body.
pub async fn execute_sql(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, ExecError> {
    run(&state, body).await.map(exec_success).map_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "sql exec failed");
        e
    })
}

async fn run(state: &AppState, body: Body) -> Result<Rows, ExecError> {
    // Buffered and decoded by hand so body failures are 500s like everything else,
    // not extractor rejections.
    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| ExecError::Body(e.to_string()))?;
    let req: ExecRequest =
        serde_json::from_slice(&bytes).map_err(|e| ExecError::Body(e.to_string()))?;
    let url = state
        .database_url
        .as_deref()
        .ok_or(ExecError::MissingConfig(DATABASE_URL_VAR))?;
    state.executor.execute(url, &req.sql).await
}

/// OPTIONS / — CORS preflight. Headers come from the router layer.
pub async fn preflight() -> &'static str {
    "ok"
}
