// src/services/quiz.rs

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        answer::Answer,
        question::{Question, QuestionWithAnswers},
        user_answer::{QuizSubmission, UserAnswerRecord},
    },
    services::scoring,
};

/// Loads every question with its answers, both ordered by id.
pub async fn load_quiz(pool: &SqlitePool) -> Result<Vec<QuestionWithAnswers>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, text, created_at FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let answers = sqlx::query_as::<_, Answer>(
        "SELECT id, question_id, text, correct, created_at FROM answers ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_question: HashMap<i64, Vec<Answer>> = HashMap::new();
    for answer in answers {
        by_question.entry(answer.question_id).or_default().push(answer);
    }

    Ok(questions
        .into_iter()
        .map(|question| {
            let answers = by_question.remove(&question.id).unwrap_or_default();
            QuestionWithAnswers { question, answers }
        })
        .collect())
}

/// Looks up the submitted answer id. Anything that is not the id of a
/// stored answer resolves to `None`; the answer is not required to belong
/// to the question it was submitted for.
async fn resolve_answer(pool: &SqlitePool, raw_id: &str) -> Result<Option<i64>, AppError> {
    let Ok(answer_id) = raw_id.trim().parse::<i64>() else {
        return Ok(None);
    };

    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM answers WHERE id = ?")
        .bind(answer_id)
        .fetch_optional(pool)
        .await?;

    Ok(found)
}

/// Inserts an unscored answer record.
pub async fn create_record(
    pool: &SqlitePool,
    user_id: i64,
    question_id: i64,
    selected_answer_id: Option<i64>,
) -> Result<UserAnswerRecord, AppError> {
    let record = sqlx::query_as::<_, UserAnswerRecord>(
        r#"
        INSERT INTO user_answers (user_id, question_id, selected_answer_id, score)
        VALUES (?, ?, ?, 0)
        RETURNING id, user_id, question_id, selected_answer_id, score
        "#,
    )
    .bind(user_id)
    .bind(question_id)
    .bind(selected_answer_id)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Records and scores a quiz submission, returning the total score.
///
/// * Walks every stored question.
/// * Questions without a selection are skipped: no record, no penalty.
/// * Each selection becomes a new `user_answers` row, scored immediately.
pub async fn submit_quiz(
    pool: &SqlitePool,
    user_id: i64,
    submission: &QuizSubmission,
) -> Result<i64, AppError> {
    let question_ids = sqlx::query_scalar::<_, i64>("SELECT id FROM questions ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut total_score = 0;
    let mut answered = 0;

    for question_id in question_ids {
        let Some(raw_id) = submission.selection_for(question_id) else {
            continue;
        };

        let selected = resolve_answer(pool, raw_id).await?;
        if selected.is_none() {
            tracing::warn!(
                "User {} submitted unknown answer {:?} for question {}",
                user_id,
                raw_id,
                question_id
            );
        }

        let mut record = create_record(pool, user_id, question_id, selected).await?;
        total_score += scoring::score(pool, &mut record).await?;
        answered += 1;
    }

    tracing::info!(
        "User {} scored {} on {} answered questions",
        user_id,
        total_score,
        answered
    );

    Ok(total_score)
}
