use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::product::Model as Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, name: &str, price: f64) -> Result<Product, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;
    async fn update(&self, id: i64, name: &str, price: f64) -> Result<Option<Product>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn find_by_name_containing(&self, needle: &str) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_price_between(&self, min: f64, max: f64) -> Result<Vec<Product>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, name: &str, price: f64) -> Result<Product, ServiceError> {
        Ok(models::product::create(&self.db, name, price).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        Ok(models::product::find_by_id(&self.db, id).await?)
    }

    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::list_all(&self.db).await?)
    }

    async fn update(&self, id: i64, name: &str, price: f64) -> Result<Option<Product>, ServiceError> {
        Ok(models::product::update(&self.db, id, name, price).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::product::delete(&self.db, id).await?)
    }

    async fn find_by_name_containing(&self, needle: &str) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::find_by_name_containing(&self.db, needle).await?)
    }

    async fn find_by_price_between(&self, min: f64, max: f64) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::find_by_price_between(&self.db, min, max).await?)
    }
}
