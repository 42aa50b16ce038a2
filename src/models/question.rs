// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::prelude::FromRow;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
/// The row doubles as the formatted JSON projection the API returns.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    /// The correct answer text.
    pub answer: String,

    /// Category identifier. Not enforced as a foreign key; an insert with an
    /// unknown category id succeeds, matching the storage schema.
    pub category: i64,

    /// Difficulty score (small integer).
    pub difficulty: i64,
}

/// Body of `POST /questions`, parsed into one of two explicit shapes before
/// dispatch: a search when `searchTerm` is present, a create otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPostBody {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

/// Search shape: `searchTerm` must be present for this variant to match,
/// but may be null or empty (rejected later with a bad-request).
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", deserialize_with = "required_nullable")]
    pub search_term: Option<String>,
}

// Makes the field required while still accepting an explicit null.
// A plain `Option` field would default to `None` on absence, and the
// untagged enum above would never fall through to the create variant.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Create shape. Every field is optional at the parse boundary so that a
/// missing or null value surfaces as an unprocessable payload rather than a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// A fully validated create payload, ready to insert.
#[derive(Debug)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl CreateQuestionRequest {
    /// Requires non-null, non-empty values for all four fields.
    pub fn validated(self) -> Result<NewQuestion, AppError> {
        let question = self.question.filter(|q| !q.is_empty());
        let answer = self.answer.filter(|a| !a.is_empty());

        match (question, answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question,
                answer,
                difficulty,
                category,
            }),
            _ => Err(AppError::Unprocessable),
        }
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Identifiers of questions already asked this game. The caller supplies
    /// the full history each time; no state is kept between calls.
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    /// Requested category. Absence is a bad-request; id 0 is the sentinel
    /// for "no category filter".
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,

    /// Display name, sent by the frontend but never consulted here.
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_with_search_term_parses_as_search() {
        let body: QuestionsPostBody =
            serde_json::from_str(r#"{"searchTerm": "capital"}"#).unwrap();
        assert!(matches!(
            body,
            QuestionsPostBody::Search(SearchRequest {
                search_term: Some(ref t)
            }) if t.as_str() == "capital"
        ));
    }

    #[test]
    fn null_search_term_still_parses_as_search() {
        let body: QuestionsPostBody = serde_json::from_str(r#"{"searchTerm": null}"#).unwrap();
        assert!(matches!(
            body,
            QuestionsPostBody::Search(SearchRequest { search_term: None })
        ));
    }

    #[test]
    fn body_without_search_term_parses_as_create() {
        let body: QuestionsPostBody =
            serde_json::from_str(r#"{"question": "Q", "answer": "A"}"#).unwrap();
        assert!(matches!(body, QuestionsPostBody::Create(_)));
    }

    #[test]
    fn partial_create_payload_is_unprocessable() {
        let req = CreateQuestionRequest {
            question: Some("Q".to_string()),
            answer: Some(String::new()),
            difficulty: Some(1),
            category: Some(1),
        };
        assert!(matches!(req.validated(), Err(AppError::Unprocessable)));
    }

    #[test]
    fn complete_create_payload_validates() {
        let req = CreateQuestionRequest {
            question: Some("Q".to_string()),
            answer: Some("A".to_string()),
            difficulty: Some(3),
            category: Some(2),
        };
        let new = req.validated().unwrap();
        assert_eq!(new.difficulty, 3);
        assert_eq!(new.category, 2);
    }
}
