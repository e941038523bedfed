//! Question repository
//!
//! - list: questions only, answers are not loaded
//! - get_with_answers: one question plus its full answer collection
//! - delete: answers are removed by the foreign key cascade

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{Answer, DbError};

/// Question record from database
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Question with every answer attached to it
#[derive(Debug, Clone)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a question; id and timestamp come back from the store.
    pub async fn create(&self, text: &str) -> Result<Question, DbError> {
        let question: Question = sqlx::query_as(
            r#"
            INSERT INTO questions (text)
            VALUES ($1)
            RETURNING id, text, created_at
            "#,
        )
        .bind(text)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = question.id, "question created");
        Ok(question)
    }

    /// List every question without answers.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as(
            r#"
            SELECT id, text, created_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Get a single question with its answers, oldest answer first.
    pub async fn get_with_answers(&self, id: i64) -> Result<QuestionWithAnswers, DbError> {
        let question: Question = sqlx::query_as(
            r#"
            SELECT id, text, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "question",
            id,
        })?;

        let answers: Vec<Answer> = sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(QuestionWithAnswers { question, answers })
    }

    /// Delete a question and, through the cascade, all of its answers.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id,
            });
        }

        tracing::debug!(id, "question deleted");
        Ok(())
    }
}
