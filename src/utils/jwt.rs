// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session";

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - Stores the User ID (as string).
    pub sub: String,
    pub username: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Malformed session".to_string()))
    }
}

/// Signs a new JWT for the user.
///
/// Arguments:
/// * `id`: User ID.
/// * `username`: shown on pages while the session is active.
pub fn sign_jwt(
    id: i64,
    username: &str,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    // Calculate expiration: current time + expiration_seconds
    let expiration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize
        + expiration_seconds as usize;

    let claims = Claims {
        sub: id.to_string(),
        username: username.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a JWT string.
///
/// Returns `None` for a bad signature, an expired token or garbage input.
pub fn verify_jwt(token: &str, secret: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|token_data| token_data.claims)
    .ok()
}

/// Reads and verifies the session cookie, if present.
pub fn current_session(jar: &CookieJar, secret: &str) -> Option<Claims> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| verify_jwt(cookie.value(), secret))
}

/// Builds the HttpOnly cookie that establishes a session.
pub fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .build()
}

/// Cookie matching `session_cookie`, used to remove it on logout.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Axum Middleware: Authentication.
///
/// Checks the session cookie. If valid, injects `Claims` into the request
/// extensions for handlers to use. Otherwise the request never reaches the
/// handler and the caller is sent back to the login page.
pub async fn require_session(
    State(config): State<Config>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match current_session(&jar, &config.jwt_secret) {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => {
            tracing::debug!("No valid session for {}, redirecting to login", req.uri());
            Redirect::to("/").into_response()
        }
    }
}
