// src/services/authoring.rs

use sqlx::SqlitePool;

use crate::{error::AppError, models::question::NewQuestion};

/// Saves a validated question and all of its answers.
///
/// The question and its answers are written in one transaction, so a failure
/// never leaves a question with only some of its answers.
/// Returns the new question's id.
pub async fn create_question(pool: &SqlitePool, new_question: &NewQuestion) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let question_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO questions (text) VALUES (?) RETURNING id",
    )
    .bind(&new_question.text)
    .fetch_one(&mut *tx)
    .await?;

    for answer in &new_question.answers {
        sqlx::query("INSERT INTO answers (question_id, text, correct) VALUES (?, ?, ?)")
            .bind(question_id)
            .bind(&answer.text)
            .bind(answer.correct)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Question {} created with {} answers",
        question_id,
        new_question.answers.len()
    );

    Ok(question_id)
}
