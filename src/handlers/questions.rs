// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        category::Category,
        question::{Question, QuestionsPostBody},
    },
    pagination::{PageParams, paginate},
};

/// Lists all questions, ten per page, together with the category index.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let total_questions = selection.len();
    let current_questions = paginate(params.page, selection);

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "categories": categories,
        "current_category": null,
    })))
}

/// Lists the questions of one category, ten per page.
///
/// The category id is echoed back as `current_category`; whether it names an
/// existing category is not checked, an unknown id simply yields no rows.
pub async fn list_questions_by_category(
    State(pool): State<SqlitePool>,
    category_id: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    // A non-numeric id segment is a path that names no resource.
    let Path(category_id) = category_id.map_err(|_| AppError::NotFound)?;

    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ? ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await?;

    let total_questions = selection.len();
    let current_questions = paginate(params.page, selection);

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "current_category": category_id,
    })))
}

/// Deletes a question by id.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(question_id) = question_id.map_err(|_| AppError::NotFound)?;

    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(question_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
    })))
}

/// Dual-purpose POST: a body carrying `searchTerm` searches question text,
/// any other object is treated as a create payload. The two shapes are
/// separated at the parse boundary, see [`QuestionsPostBody`].
///
/// Any body that fits neither shape (absent, null, not an object) is a
/// bad-request.
pub async fn create_or_search_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    payload: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = payload.map_err(|_| AppError::BadRequest)?;

    match body {
        QuestionsPostBody::Search(req) => {
            let term = req
                .search_term
                .filter(|t| !t.is_empty())
                .ok_or(AppError::BadRequest)?;

            // SQLite LIKE is case-insensitive for ASCII, matching the
            // case-insensitive substring contract.
            let pattern = format!("%{}%", term);
            let selection = sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, category, difficulty FROM questions \
                 WHERE question LIKE ? ORDER BY id",
            )
            .bind(&pattern)
            .fetch_all(&pool)
            .await?;

            let total_questions = selection.len();
            let current_questions = paginate(params.page, selection);

            if current_questions.is_empty() {
                return Err(AppError::NotFound);
            }

            Ok(Json(json!({
                "success": true,
                "questions": current_questions,
                "total_questions": total_questions,
                "current_category": null,
            })))
        }
        QuestionsPostBody::Create(req) => {
            let new = req.validated()?;

            let created = sqlx::query_as::<_, Question>(
                "INSERT INTO questions (question, answer, category, difficulty) \
                 VALUES (?, ?, ?, ?) \
                 RETURNING id, question, answer, category, difficulty",
            )
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&pool)
            .await?;

            Ok(Json(json!({
                "success": true,
                "created": created,
            })))
        }
    }
}
