//! Response envelopes for the exec endpoint.

use crate::service::Rows;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ExecSuccess {
    pub success: bool,
    pub result: Rows,
}

pub fn exec_success(result: Rows) -> (StatusCode, Json<ExecSuccess>) {
    (
        StatusCode::OK,
        Json(ExecSuccess {
            success: true,
            result,
        }),
    )
}
