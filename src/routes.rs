// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, leaderboard, questions, quizzes},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (categories, questions, quizzes, leaderboard).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let category_routes = Router::new()
        .route("/", get(categories::list_categories))
        .route("/{id}/questions", get(questions::list_questions_by_category));

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_or_search_questions),
        )
        .route("/{id}", delete(questions::delete_question));

    let quiz_routes = Router::new().route("/", post(quizzes::next_quiz_question));

    let leaderboard_routes = Router::new().route(
        "/",
        get(leaderboard::list_scores).post(leaderboard::submit_score),
    );

    Router::new()
        .nest("/categories", category_routes)
        .nest("/questions", question_routes)
        .nest("/quizzes", quiz_routes)
        .nest("/leaderboard", leaderboard_routes)
        // Unmatched paths and wrong verbs get the same fixed JSON envelopes
        // as in-handler failures.
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
