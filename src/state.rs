//! Shared application state for all routes. Immutable after startup.

use crate::config::{Settings, DEFAULT_MAX_BODY_BYTES};
use crate::service::{PgExecutor, SqlExecutor};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Connection string for every exec request; `None` makes each request fail before connecting.
    pub database_url: Option<Arc<str>>,
    pub executor: Arc<dyn SqlExecutor>,
    /// Largest exec body accepted; anything bigger is a 500 like other body errors.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(database_url: Option<String>, executor: Arc<dyn SqlExecutor>) -> Self {
        AppState {
            database_url: database_url.map(Arc::from),
            executor,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// State backed by the real Postgres executor.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.database_url.clone(), Arc::new(PgExecutor))
            .with_max_body_bytes(settings.max_body_bytes)
    }
}
