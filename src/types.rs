//! Shared types used across the codebase

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::services::CafeService;

/// Handler state: the cafe store plus the raw pool for health checks
#[derive(Clone)]
pub struct AppState {
    pub cafes: Arc<CafeService>,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(cafes: Arc<CafeService>, pool: SqlitePool) -> Self {
        Self { cafes, pool }
    }
}
