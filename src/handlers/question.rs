// src/handlers/question.rs

use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::question::NewQuestion,
    services::authoring,
    utils::jwt::Claims,
    views,
};

pub async fn question_form() -> impl IntoResponse {
    views::question::question_form()
}

/// Creates a question with its answers, then returns to an empty form.
///
/// Invalid question text re-renders the empty form and writes nothing.
pub async fn submit_question(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let payload = NewQuestion::from_form_fields(&fields);

    if let Err(validation_errors) = payload.validate() {
        tracing::debug!(
            "Question from {} rejected: {}",
            claims.username,
            validation_errors
        );
        return Ok(views::question::question_form().into_response());
    }

    authoring::create_question(&pool, &payload).await?;

    Ok(Redirect::to("/add_question").into_response())
}
