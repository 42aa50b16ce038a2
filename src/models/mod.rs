// src/models/mod.rs

pub mod category;
pub mod leaderboard;
pub mod question;
