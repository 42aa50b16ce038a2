// src/handlers/quizzes.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use serde_json::json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::AppError,
    models::question::{Question, QuizCategory, QuizRequest},
};

/// Picks the next quiz question uniformly at random.
///
/// The caller supplies the requested category and the full list of question
/// ids already asked; no game state lives in the service. An exhausted
/// candidate set is a success carrying a null question, which signals the
/// end of the game.
pub async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest)?;

    let category = req.quiz_category.ok_or(AppError::BadRequest)?;

    let candidates = quiz_candidates(&pool, &category, &req.previous_questions).await?;
    let question = candidates.choose(&mut rand::thread_rng());

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

/// Fetches the questions still eligible for this game.
///
/// Category id 0 is the sentinel for "all categories". Uses a QueryBuilder
/// for the dynamic NOT IN clause.
async fn quiz_candidates(
    pool: &SqlitePool,
    category: &QuizCategory,
    previous_questions: &[i64],
) -> Result<Vec<Question>, AppError> {
    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );

    if category.id != 0 {
        builder.push(" AND category = ").push_bind(category.id);
    }

    if !previous_questions.is_empty() {
        builder.push(" AND id NOT IN (");
        let mut separated = builder.separated(", ");
        for id in previous_questions {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
    }

    let candidates = builder
        .build_query_as::<Question>()
        .fetch_all(pool)
        .await?;

    Ok(candidates)
}
