use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::tools::ToolRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Built once at startup; resolved per request by tool id.
    pub tools: Arc<ToolRegistry>,
}
