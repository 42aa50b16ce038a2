// src/handlers/mod.rs

pub mod categories;
pub mod leaderboard;
pub mod questions;
pub mod quizzes;
