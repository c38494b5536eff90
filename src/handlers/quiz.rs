// src/handlers/quiz.rs

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::user_answer::QuizSubmission,
    services::{quiz, results},
    utils::jwt::Claims,
    views,
};

/// Shows every question with its answers.
pub async fn quiz_page(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let questions = quiz::load_quiz(&pool).await?;
    Ok(views::quiz::quiz_page(&questions))
}

/// Submits the quiz and redirects to the results page.
///
/// * Form fields are `question_<id>=<answer id>`.
/// * Each answered question is stored and scored (1 point if correct).
/// * Unanswered questions are skipped.
pub async fn submit_quiz(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;
    let submission = QuizSubmission::from_form_fields(&fields);

    let total_score = quiz::submit_quiz(&pool, user_id, &submission).await?;

    Ok(Redirect::to(&format!("/quiz_result/{}", total_score)))
}

/// Shows the score against the current number of questions.
pub async fn quiz_result(
    State(pool): State<SqlitePool>,
    Path(score): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let result = results::present(&pool, score).await?;
    Ok(views::quiz::results_page(&result))
}
