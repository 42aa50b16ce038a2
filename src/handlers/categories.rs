// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{error::AppError, models::category::Category};

/// Lists all categories.
///
/// An empty store is treated as a not-found condition rather than an empty
/// success, so a freshly provisioned database surfaces loudly.
pub async fn list_categories(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(&pool)
        .await?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "total_categories": categories.len(),
        "categories": categories,
    })))
}
