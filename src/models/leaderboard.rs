// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::error::AppError;

/// Represents the 'leaderboard' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub player: String,
    pub score: i64,
    pub created_at: Option<chrono::NaiveDateTime>,
}

/// DTO for returning a leaderboard entry (excludes the row timestamp).
#[derive(Debug, Serialize)]
pub struct LeaderboardScore {
    pub id: i64,
    pub player: String,
    pub score: i64,
}

impl From<LeaderboardEntry> for LeaderboardScore {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id,
            player: entry.player,
            score: entry.score,
        }
    }
}

/// DTO for submitting a score.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub name: String,

    /// Raw JSON value so that both `42` and `"42"` are accepted; anything
    /// not coercible to an integer is a bad-request.
    pub score: serde_json::Value,
}

impl SubmitScoreRequest {
    pub fn score_value(&self) -> Result<i64, AppError> {
        match &self.score {
            serde_json::Value::Number(n) => n.as_i64().ok_or(AppError::BadRequest),
            serde_json::Value::String(s) => {
                s.trim().parse::<i64>().map_err(|_| AppError::BadRequest)
            }
            _ => Err(AppError::BadRequest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_score_is_accepted() {
        let req = SubmitScoreRequest {
            name: "ada".to_string(),
            score: json!(42),
        };
        assert_eq!(req.score_value().unwrap(), 42);
    }

    #[test]
    fn numeric_string_score_is_coerced() {
        let req = SubmitScoreRequest {
            name: "ada".to_string(),
            score: json!("17"),
        };
        assert_eq!(req.score_value().unwrap(), 17);
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        for score in [json!("lots"), json!(3.5), json!(null), json!([1])] {
            let req = SubmitScoreRequest {
                name: "ada".to_string(),
                score,
            };
            assert!(matches!(req.score_value(), Err(AppError::BadRequest)));
        }
    }
}
