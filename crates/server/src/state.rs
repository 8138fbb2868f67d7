use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::product::{ProductService, SeaOrmProductRepository};

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService<SeaOrmProductRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmProductRepository { db });
        Self { products: Arc::new(ProductService::new(repo)) }
    }
}
