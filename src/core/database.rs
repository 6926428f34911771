use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Build the connection pool for the items table. Pool sizing and
/// timeouts come from `DatabaseConfig`; a household deployment needs
/// very few connections.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}
