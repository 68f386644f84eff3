//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Both fields are cheap to clone: the database connection is
//! a pool handle and the lock service shares its map through an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::match_lock::MatchLockService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-match locks serializing writes and settlement of the same match.
    pub match_locks: MatchLockService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            match_locks: MatchLockService::new(),
        }
    }
}
