//! Answer repository
//!
//! Creation checks that the owning question exists inside the same
//! transaction as the insert.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Answer record from database
#[derive(Debug, Clone, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Answer repository
pub struct AnswerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Attach a new answer to an existing question.
    ///
    /// Returns `MissingParent` if the question does not exist, including
    /// when it is deleted between the check and the insert.
    pub async fn create(
        &self,
        question_id: i64,
        user_id: &str,
        text: &str,
    ) -> Result<Answer, DbError> {
        let mut tx = self.pool.begin().await?;

        let question_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)")
                .bind(question_id)
                .fetch_one(&mut *tx)
                .await?;

        if !question_exists.0 {
            return Err(DbError::MissingParent {
                resource: "question",
                id: question_id,
            });
        }

        let answer: Answer = sqlx::query_as(
            r#"
            INSERT INTO answers (question_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                DbError::MissingParent {
                    resource: "question",
                    id: question_id,
                }
            }
            other => DbError::Sqlx(other),
        })?;

        tx.commit().await?;

        tracing::debug!(id = answer.id, question_id, "answer created");
        Ok(answer)
    }

    /// Get a single answer by ID.
    pub async fn get(&self, id: i64) -> Result<Answer, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "answer",
            id,
        })
    }

    /// Delete a single answer.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "answer",
                id,
            });
        }

        Ok(())
    }
}
