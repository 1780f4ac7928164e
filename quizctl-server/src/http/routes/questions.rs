//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use quizctl_core::Question;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, QuestionId};
use crate::http::server::AppState;

/// POST /question - create a question, echoing it back with its new id
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(question): JsonBody<Question>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    tracing::debug!("create question");
    let id = state.questions.create(&question).await?;

    Ok((StatusCode::CREATED, Json(question.with_id(id))))
}

/// PUT /question/{id} - replace body and options of a question
async fn update_question(
    State(state): State<Arc<AppState>>,
    QuestionId(id): QuestionId,
    JsonBody(question): JsonBody<Question>,
) -> Result<Json<Question>, ApiError> {
    tracing::debug!(question_id = id, "update question");
    let question = question.with_id(id);
    state.questions.update(&question).await?;

    Ok(Json(question))
}

/// DELETE /question/{id} - remove a question and its options
async fn delete_question(
    State(state): State<Arc<AppState>>,
    QuestionId(id): QuestionId,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(question_id = id, "delete question");
    state.questions.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /questions?last_id=&size= - list questions, seek-paginated when last_id is given
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state.questions.list_all(page.last_id, page.size).await?;
    Ok(Json(questions))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/question", post(create_question))
        .route("/question/{id}", put(update_question).delete(delete_question))
        .route("/questions", get(list_questions))
}
