//! Repository implementations for database access
//!
//! Each repository borrows the pool for the lifetime of one request.
//! Single-row inserts and deletes rely on the store's own atomicity.

pub mod answers;
pub mod questions;

pub use answers::{Answer, AnswerRepo};
pub use questions::{Question, QuestionRepo, QuestionWithAnswers};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    /// The row a new record should hang off does not exist.
    #[error("{resource} '{id}' does not exist")]
    MissingParent { resource: &'static str, id: i64 },
}
