// src/state.rs

use crate::config::Config;
use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared handler state: the quiz database and runtime configuration.
/// Handlers extract whichever half they need via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

// Session signing secret and cookie flags live in `Config`.
impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
