//! Question endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::answers::AnswerResponse;
use crate::db::repos::{Question, QuestionRepo, QuestionWithAnswers};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;

/// Create question request
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub text: String,
}

/// Question response
///
/// `answers` is only present on single-question reads.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub text: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerResponse>>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            created_at: q.created_at.to_rfc3339(),
            answers: None,
        }
    }
}

impl From<QuestionWithAnswers> for QuestionResponse {
    fn from(q: QuestionWithAnswers) -> Self {
        Self {
            answers: Some(q.answers.into_iter().map(AnswerResponse::from).collect()),
            ..Self::from(q.question)
        }
    }
}

/// GET /questions - list all questions without answers
async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = QuestionRepo::new(&state.pool).list().await?;
    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// POST /questions - create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let question = QuestionRepo::new(&state.pool).create(&req.text).await?;
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// GET /questions/{id} - get a question with its answers
async fn get_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = QuestionRepo::new(&state.pool).get_with_answers(id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

/// DELETE /questions/{id} - delete a question and its answers
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    QuestionRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/", get(list_questions).post(create_question))
        .route("/questions/{id}", get(get_question).delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::db::repos::Answer;

    fn question() -> Question {
        Question {
            id: 1,
            text: "Why?".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn listed_question_has_no_answers_key() {
        let json = serde_json::to_value(QuestionResponse::from(question())).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Why?");
        assert_eq!(json["created_at"], "2024-05-01T12:00:00+00:00");
        assert!(json.get("answers").is_none());
    }

    #[test]
    fn fetched_question_carries_answers() {
        let full = QuestionWithAnswers {
            question: question(),
            answers: vec![Answer {
                id: 9,
                question_id: 1,
                user_id: "u1".into(),
                text: "Because".into(),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap(),
            }],
        };

        let json = serde_json::to_value(QuestionResponse::from(full)).unwrap();
        let answers = json["answers"].as_array().unwrap();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0]["question_id"], 1);
        assert_eq!(answers[0]["user_id"], "u1");
    }

    #[test]
    fn fetched_question_without_answers_has_empty_list() {
        let full = QuestionWithAnswers {
            question: question(),
            answers: vec![],
        };

        let json = serde_json::to_value(QuestionResponse::from(full)).unwrap();
        assert_eq!(json["answers"], serde_json::json!([]));
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let req: CreateQuestionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }
}
