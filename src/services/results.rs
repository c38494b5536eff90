// src/services/results.rs

use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppError;

/// Data shown on the results page.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub score: u64,
    pub total_questions: i64,
    pub percentage: f64,
}

/// `100 * score / total`, or 0 when there are no questions.
/// Not clamped: a score above the total gives more than 100.
pub fn percentage(score: u64, total_questions: i64) -> f64 {
    if total_questions > 0 {
        score as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    }
}

/// Renders a percentage with at most two decimals and no trailing zeros.
pub fn format_percentage(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub async fn present(pool: &SqlitePool, score: u64) -> Result<QuizResult, AppError> {
    let total_questions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    Ok(QuizResult {
        score,
        total_questions,
        percentage: percentage(score, total_questions),
    })
}
