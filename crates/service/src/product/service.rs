use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::product::domain::{PriceRange, ProductInput};
use crate::product::repository::ProductRepository;
use models::product::Model as Product;

/// Application service for products.
/// Absent ids surface as `ServiceError::NotFound`; there are no other business rules.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ProductInput) -> Result<Product, ServiceError> {
        let created = self.repo.create(&input.name, input.price).await?;
        info!(id = created.id, "product_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Product, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("product"))
    }

    /// Overwrites only name and price; id and createdAt of the stored record survive.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ProductInput) -> Result<Product, ServiceError> {
        let updated = self
            .repo
            .update(id, &input.name, input.price)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        info!(id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("product"));
        }
        info!(id, "product_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn search_by_name(&self, needle: &str) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_by_name_containing(needle).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_price(&self, range: PriceRange) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_by_price_between(range.min, range.max).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product_service;
    use std::sync::Mutex;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput { name: name.into(), price }
    }

    #[tokio::test]
    async fn create_update_roundtrip() -> anyhow::Result<()> {
        let svc = product_service().await?;

        let created = svc.create(input("Widget", 9.99)).await?;
        let fetched = svc.get(created.id).await?;
        assert_eq!(fetched, created);

        let updated = svc.update(created.id, input("Widget XL", 14.99)).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Widget XL");
        assert_eq!(updated.price, 14.99);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> anyhow::Result<()> {
        let svc = product_service().await?;

        assert!(matches!(svc.get(999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(999, input("x", 1.0)).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(999).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
        let svc = product_service().await?;

        let p = svc.create(input("Widget", 9.99)).await?;
        svc.delete(p.id).await?;
        assert!(matches!(svc.get(p.id).await, Err(ServiceError::NotFound(_))));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn searches_delegate_to_store_queries() -> anyhow::Result<()> {
        let svc = product_service().await?;

        let cheap = svc.create(input("Widget", 9.99)).await?;
        let xl = svc.create(input("Widget XL", 14.99)).await?;

        let by_name = svc.search_by_name("wid").await?;
        assert_eq!(by_name.len(), 2);

        let by_price = svc.search_by_price(PriceRange { min: 10.0, max: 20.0 }).await?;
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].id, xl.id);
        assert!(by_price.iter().all(|p| p.id != cheap.id));
        Ok(())
    }

    struct SpanNames(Arc<Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> Layer<S> for SpanNames {
        fn on_new_span(&self, attrs: &tracing::span::Attributes<'_>, _id: &tracing::span::Id, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(attrs.metadata().name().to_string());
        }
    }

    #[tokio::test]
    async fn read_operations_open_spans() -> anyhow::Result<()> {
        let names = Arc::new(Mutex::new(Vec::new()));
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(SpanNames(Arc::clone(&names))),
        );
        let svc = product_service().await?;

        svc.list().await?;
        svc.search_by_name("wid").await?;
        svc.search_by_price(PriceRange { min: 1.0, max: 2.0 }).await?;

        let names = names.lock().unwrap();
        for op in ["list", "search_by_name", "search_by_price"] {
            assert!(names.iter().any(|n| n == op), "no span for {op}: {names:?}");
        }
        Ok(())
    }
}
