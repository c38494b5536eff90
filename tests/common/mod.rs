// tests/common/mod.rs

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use quiz_backend::{config::Config, db, routes, state::AppState};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_for_integration_tests";

/// Builds the app on a fresh in-memory database.
/// Returns the router and a handle to the same database for seeding and assertions.
pub async fn spawn_app() -> (Router, SqlitePool) {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        secure_cookies: false,
    };

    let state = AppState {
        pool: pool.clone(),
        config,
    };

    (routes::create_router(state), pool)
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(req.body(Body::empty()).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

/// Posts url-encoded pairs, as a browser form would.
pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let mut req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(req.body(Body::from(body)).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

/// Minimal percent-encoding for test form values.
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The `name=value` part of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Registers a user and returns the session cookie to send on later requests.
pub async fn register(app: &Router, username: &str) -> String {
    let email = format!("{}@example.com", username);
    let response = post_form(
        app,
        "/register",
        &[
            ("username", username),
            ("email", &email),
            ("password", "password123"),
        ],
        None,
    )
    .await;
    session_cookie(&response).expect("registration should start a session")
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}

/// Inserts a question directly and returns `(question_id, answer_ids)`.
pub async fn seed_question(pool: &SqlitePool, text: &str, answers: &[(&str, bool)]) -> (i64, Vec<i64>) {
    let question_id: i64 = sqlx::query_scalar("INSERT INTO questions (text) VALUES (?) RETURNING id")
        .bind(text)
        .fetch_one(pool)
        .await
        .expect("insert question");

    let mut answer_ids = Vec::new();
    for &(answer_text, correct) in answers {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO answers (question_id, text, correct) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(question_id)
        .bind(answer_text)
        .bind(correct)
        .fetch_one(pool)
        .await
        .expect("insert answer");
        answer_ids.push(id);
    }

    (question_id, answer_ids)
}
