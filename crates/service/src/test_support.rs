#![cfg(test)]
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::product::{ProductService, SeaOrmProductRepository};

/// Migrated in-memory database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub async fn product_service() -> Result<ProductService<SeaOrmProductRepository>, anyhow::Error> {
    let db = get_db().await?;
    Ok(ProductService::new(Arc::new(SeaOrmProductRepository { db })))
}
