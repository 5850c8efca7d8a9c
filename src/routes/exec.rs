//! SQL exec route: POST runs SQL, OPTIONS answers preflight.

use crate::handlers::exec::{execute_sql, preflight};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn exec_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(execute_sql).options(preflight))
        .with_state(state)
}
