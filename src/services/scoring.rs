// src/services/scoring.rs

use sqlx::SqlitePool;

use crate::{error::AppError, models::user_answer::UserAnswerRecord};

/// Scores one answer record: 1 point if the selected answer is flagged
/// correct, 0 otherwise (including when no answer was resolved).
///
/// Writes the score to the record's row and mirrors it on `record`.
/// Calling it again on the same record yields the same score.
pub async fn score(pool: &SqlitePool, record: &mut UserAnswerRecord) -> Result<i64, AppError> {
    let correct = match record.selected_answer_id {
        Some(answer_id) => {
            sqlx::query_scalar::<_, bool>("SELECT correct FROM answers WHERE id = ?")
                .bind(answer_id)
                .fetch_optional(pool)
                .await?
                .unwrap_or(false)
        }
        None => false,
    };

    let score = i64::from(correct);

    sqlx::query("UPDATE user_answers SET score = ? WHERE id = ?")
        .bind(score)
        .bind(record.id)
        .execute(pool)
        .await?;

    record.score = score;

    Ok(score)
}
