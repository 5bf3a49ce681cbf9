use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductChanges, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// One page of products matching the filter, newest first
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Count products matching the filter's search, ignoring the window
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;

    /// Merge the supplied changes. Returns `false` if no product has this id.
    async fn update(&self, id: ObjectId, changes: ProductChanges) -> ProductResult<bool>;

    /// Returns `false` if no product has this id.
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ObjectId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(
        products: &'a HashMap<ObjectId, Product>,
        filter: &'a ProductFilter,
    ) -> impl Iterator<Item = &'a Product> {
        products.values().filter(move |p| match &filter.search {
            Some(term) => p.matches(term),
            None => true,
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = Self::matching(&products, &filter).cloned().collect();
        result.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(result
            .into_iter()
            .skip(usize::try_from(filter.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(filter.limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let products = self.products.read().await;
        Ok(Self::matching(&products, &filter).count() as u64)
    }

    async fn update(&self, id: ObjectId, changes: ProductChanges) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(product) => {
                product.apply_changes(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}
