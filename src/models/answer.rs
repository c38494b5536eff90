// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'answers' table in the database.
/// Every answer belongs to exactly one question and is deleted with it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub correct: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One candidate answer inside a `NewQuestion`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAnswer {
    pub text: String,
    pub correct: bool,
}
