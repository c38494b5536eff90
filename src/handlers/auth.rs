// src/handlers/auth.rs

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginForm, RegisterForm},
    services::identity::{self, INVALID_CREDENTIALS, RegisterOutcome},
    utils::jwt::{current_session, expired_session_cookie, session_cookie, sign_jwt},
    views,
};

/// Renders the login page, or the signed-in landing page when a session exists.
pub async fn index(State(config): State<Config>, jar: CookieJar) -> impl IntoResponse {
    let session = current_session(&jar, &config.jwt_secret);
    views::auth::index_page(session.as_ref().map(|c| c.username.as_str()), None)
}

/// Authenticates a user and starts a session.
///
/// A wrong username or password re-renders the login form with an inline message.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    jar: CookieJar,
    Form(payload): Form<LoginForm>,
) -> Result<Response, AppError> {
    let Some(user) = identity::authenticate(&pool, &payload.username, &payload.password).await?
    else {
        tracing::info!("Failed login attempt for {}", payload.username);
        return Ok(views::auth::index_page(None, Some(INVALID_CREDENTIALS)).into_response());
    };

    let token = sign_jwt(user.id, &user.username, &config.jwt_secret, config.jwt_expiration)?;

    Ok((jar.add(session_cookie(token, &config)), Redirect::to("/")).into_response())
}

/// Ends the session and returns to the start page.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(expired_session_cookie()), Redirect::to("/"))
}

pub async fn register_page() -> impl IntoResponse {
    views::auth::register_page(None)
}

/// Registers a new user and logs them in.
///
/// Taken usernames or emails re-render the form with an inline message and
/// leave the users table untouched.
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    jar: CookieJar,
    Form(payload): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if let Err(validation_errors) = payload.validate() {
        tracing::debug!("Registration rejected: {}", validation_errors);
        return Ok(views::auth::register_page(Some("All fields are required")).into_response());
    }

    let user = match identity::register(&pool, &payload).await? {
        RegisterOutcome::Created(user) => user,
        RegisterOutcome::Rejected(message) => {
            return Ok(views::auth::register_page(Some(message)).into_response());
        }
    };

    let token = sign_jwt(user.id, &user.username, &config.jwt_secret, config.jwt_expiration)?;

    Ok((jar.add(session_cookie(token, &config)), Redirect::to("/")).into_response())
}
