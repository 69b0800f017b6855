use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/articles",
            get(handlers::list_articles).post(handlers::ingest_articles),
        )
        .route("/api/articles/:id", delete(handlers::delete_article))
        .route("/api/articles/:id/stats", get(handlers::get_article_stats))
        .with_state(state)
}
