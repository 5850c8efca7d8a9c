//! SQL execution service.

pub mod executor;
pub mod rows;
pub use executor::{PgExecutor, SqlExecutor};
pub use rows::Rows;
