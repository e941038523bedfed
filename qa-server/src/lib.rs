//! qa-server: questions and answers over HTTP
//!
//! A thin mapping from JSON requests to PostgreSQL rows. Questions own
//! their answers; deleting a question cascades to every answer under it.

pub mod db;
pub mod http;

pub use db::{create_pool, DEFAULT_DATABASE_URL};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
