use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryAdvisor;

/// Create routes for the categories feature
pub fn routes(advisor: Arc<CategoryAdvisor>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/suggest", get(handlers::suggest_category))
        .with_state(advisor)
}
