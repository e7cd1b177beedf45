pub mod health;
pub mod tools;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::records::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Calculation widgets
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/:id", get(tools::handle_describe_tool))
        .route("/api/v1/tools/:id/compute", post(tools::handle_compute))
        .route("/api/v1/tools/:id/qr", get(tools::handle_tool_qr))
        .route("/api/v1/qr", get(tools::handle_qr))
        // Record store
        .route(
            "/api/v1/job-postings",
            post(handlers::create_job_posting).get(handlers::list_job_postings),
        )
        .route(
            "/api/v1/bench-resources",
            post(handlers::create_bench_resource).get(handlers::list_bench_resources),
        )
        .route(
            "/api/v1/subscribers",
            post(handlers::create_subscriber).get(handlers::list_subscribers),
        );

    // Prebuilt frontend assets with an index.html fallback so client-side
    // routes resolve after a hard refresh.
    if let Some(dir) = &state.config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.with_state(state)
}
