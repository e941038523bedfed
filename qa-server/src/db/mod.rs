//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool with a small fixed ceiling
//! - Schema is created idempotently at startup
//! - Repositories borrow the pool; nothing holds a global handle

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{
    create_pool, create_pool_with_options, parse_connect_options, resolve_database_url,
    DEFAULT_DATABASE_URL,
};
pub use repos::*;
