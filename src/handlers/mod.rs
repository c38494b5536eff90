// src/handlers/mod.rs

pub mod auth;
pub mod question;
pub mod quiz;

use crate::error::AppError;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
