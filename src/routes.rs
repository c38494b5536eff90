// src/routes.rs

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{self, auth, question, quiz},
    state::AppState,
    utils::jwt::require_session,
};

/// Assembles the main application router.
///
/// * Public pages: login, logout, registration, results.
/// * Session-only pages: quiz and question authoring. Without a valid
///   session they redirect to `/` before any handler runs.
/// * Applies global middleware (Trace) and injects global state.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(auth::index).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/quiz_result/{score}", get(quiz::quiz_result));

    let protected_routes = Router::new()
        .route(
            "/add_question",
            get(question::question_form).post(question::submit_question),
        )
        .route(
            "/load_questions",
            get(quiz::quiz_page).post(quiz::submit_quiz),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(handlers::not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
