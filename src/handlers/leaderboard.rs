// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::leaderboard::{LeaderboardEntry, LeaderboardScore, SubmitScoreRequest},
    pagination::{PageParams, paginate},
};

/// Lists leaderboard scores, highest first, ten per page.
///
/// Unlike the question listings, an empty page here is an ordinary success:
/// a fresh leaderboard is not an error. Note the envelope also omits the
/// `success` field.
pub async fn list_scores(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT id, player, score, created_at FROM leaderboard ORDER BY score DESC, id",
    )
    .fetch_all(&pool)
    .await?;

    let total_results = selection.len();
    let scores: Vec<LeaderboardScore> = selection.into_iter().map(Into::into).collect();
    let results = paginate(params.page, scores);

    Ok(Json(json!({
        "results": results,
        "totalResults": total_results,
    })))
}

/// Records a new score.
///
/// The whole pipeline, parse, coerce, insert, collapses into a bad-request
/// on failure; the submitter gets no further detail.
pub async fn submit_score(
    State(pool): State<SqlitePool>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|_| AppError::BadRequest)?;
    let score = req.score_value()?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO leaderboard (player, score) VALUES (?, ?) RETURNING id",
    )
    .bind(&req.name)
    .bind(score)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::warn!("Failed to insert leaderboard entry: {:?}", e);
        AppError::BadRequest
    })?;

    Ok(Json(json!({
        "success": true,
        "added": id,
    })))
}
