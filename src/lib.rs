//! sql-exec: a pass-through SQL execution endpoint over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Settings;
pub use error::{ConfigError, ExecError};
pub use response::exec_success;
pub use routes::{app, common_routes_with_ready, exec_routes};
pub use service::{PgExecutor, Rows, SqlExecutor};
pub use state::AppState;
