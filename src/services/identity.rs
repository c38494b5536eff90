// src/services/identity.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::user::{RegisterForm, User},
    utils::hash::{hash_password, verify_password},
};

pub const USERNAME_TAKEN: &str = "Username already exists";
pub const EMAIL_TAKEN: &str = "Email already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub enum RegisterOutcome {
    /// Account created.
    Created(User),
    /// Nothing was written; the message is shown on the form.
    Rejected(&'static str),
}

async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, AppError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, AppError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Creates an account unless the username or email is already taken.
/// The username is checked first.
pub async fn register(pool: &SqlitePool, form: &RegisterForm) -> Result<RegisterOutcome, AppError> {
    if username_exists(pool, &form.username).await? {
        return Ok(RegisterOutcome::Rejected(USERNAME_TAKEN));
    }

    if email_exists(pool, &form.email).await? {
        return Ok(RegisterOutcome::Rejected(EMAIL_TAKEN));
    }

    let hashed_password = hash_password(&form.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password)
        VALUES (?, ?, ?)
        RETURNING id, username, email, password, created_at
        "#,
    )
    .bind(&form.username)
    .bind(&form.email)
    .bind(&hashed_password)
    .fetch_one(pool)
    .await;

    match user {
        Ok(user) => {
            tracing::info!("Registered user {}", user.username);
            Ok(RegisterOutcome::Created(user))
        }
        // Lost a race with a concurrent registration for the same name.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            let message = if e.message().contains("users.email") {
                EMAIL_TAKEN
            } else {
                USERNAME_TAKEN
            };
            Ok(RegisterOutcome::Rejected(message))
        }
        Err(e) => {
            tracing::error!("Failed to register user: {:?}", e);
            Err(AppError::from(e))
        }
    }
}

/// Returns the user when the username exists and the password matches.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    if verify_password(password, &user.password)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn form(username: &str, email: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let pool = db::connect_in_memory().await.unwrap();

        let outcome = register(&pool, &form("alice", "alice@example.com")).await.unwrap();
        assert!(matches!(outcome, RegisterOutcome::Created(ref u) if u.username == "alice"));

        let user = authenticate(&pool, "alice", "password123").await.unwrap();
        assert!(user.is_some());
        assert!(authenticate(&pool, "alice", "nope").await.unwrap().is_none());
        assert!(authenticate(&pool, "nobody", "password123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_reported_before_email() {
        let pool = db::connect_in_memory().await.unwrap();
        register(&pool, &form("alice", "alice@example.com")).await.unwrap();

        let both = register(&pool, &form("alice", "alice@example.com")).await.unwrap();
        assert!(matches!(both, RegisterOutcome::Rejected(USERNAME_TAKEN)));

        let email_only = register(&pool, &form("alice2", "alice@example.com")).await.unwrap();
        assert!(matches!(email_only, RegisterOutcome::Rejected(EMAIL_TAKEN)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
