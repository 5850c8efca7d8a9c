//! HTTP handlers for SQL execution.

pub mod exec;
pub use exec::*;
