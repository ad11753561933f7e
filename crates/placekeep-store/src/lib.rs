// SQLite place store
// One table, one connection, no caching

mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
