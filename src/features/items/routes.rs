use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::CategoryAdvisor;
use crate::features::items::handlers;
use crate::features::items::services::InventoryService;

/// Shared state for the items feature. Creating an item consults the
/// category advisor for a suggestion, hence both services.
#[derive(Clone)]
pub struct ItemsState {
    pub inventory: Arc<InventoryService>,
    pub advisor: Arc<CategoryAdvisor>,
}

/// Create routes for the items feature
pub fn routes(inventory: Arc<InventoryService>, advisor: Arc<CategoryAdvisor>) -> Router {
    let state = ItemsState { inventory, advisor };

    Router::new()
        .route(
            "/api/items",
            get(handlers::list_dashboard).post(handlers::create_item),
        )
        .route("/api/items/history", get(handlers::list_history))
        .route("/api/items/expiring", get(handlers::list_expiring))
        .route("/api/items/expiry-check", get(handlers::expiry_check))
        .route(
            "/api/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/api/items/{id}/consume", post(handlers::consume_item))
        .route("/api/items/{id}/finish", post(handlers::finish_item))
        .route("/api/items/{id}/restore", post(handlers::restore_item))
        .with_state(state)
}
