//! Answer endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Answer, AnswerRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;

/// Create answer request
#[derive(Debug, Default, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

/// Answer response
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: String,
}

impl From<Answer> for AnswerResponse {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            question_id: a.question_id,
            user_id: a.user_id,
            text: a.text,
            created_at: a.created_at.to_rfc3339(),
        }
    }
}

/// POST /questions/{id}/answers - add an answer to a question
async fn create_answer(
    State(state): State<Arc<AppState>>,
    ValidId(question_id): ValidId,
    JsonBody(req): JsonBody<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<AnswerResponse>), ApiError> {
    let answer = AnswerRepo::new(&state.pool)
        .create(question_id, &req.user_id, &req.text)
        .await?;

    Ok((StatusCode::CREATED, Json(AnswerResponse::from(answer))))
}

/// GET /answers/{id} - get a single answer
async fn get_answer(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<AnswerResponse>, ApiError> {
    let answer = AnswerRepo::new(&state.pool).get(id).await?;
    Ok(Json(AnswerResponse::from(answer)))
}

/// DELETE /answers/{id} - delete a single answer
async fn delete_answer(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    AnswerRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Answer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions/{id}/answers", post(create_answer))
        .route("/answers/{id}", get(get_answer).delete(delete_answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_default_to_empty() {
        let req: CreateAnswerRequest = serde_json::from_str(r#"{"text":"Because"}"#).unwrap();
        assert_eq!(req.user_id, "");
        assert_eq!(req.text, "Because");
    }

    #[test]
    fn request_rejects_wrong_types() {
        assert!(serde_json::from_str::<CreateAnswerRequest>(r#"{"user_id":5}"#).is_err());
    }
}
