//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::optional_search_filter;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId, to_document},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{COLLECTION, Product, ProductChanges, ProductFilter, SEARCH_FIELDS};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Product>(COLLECTION),
        }
    }

    fn build_filter(filter: &ProductFilter) -> Document {
        optional_search_filter(filter.search.as_deref(), &SEARCH_FIELDS)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(code = %product.code))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let options = FindOptions::builder()
            .sort(doc! { "_id": -1 })
            .skip(filter.skip)
            .limit(filter.limit as i64)
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(&filter))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: ObjectId, changes: ProductChanges) -> ProductResult<bool> {
        let selector = doc! { "_id": id };

        if changes.is_empty() {
            let count = self.collection.count_documents(selector).await?;
            return Ok(count > 0);
        }

        let set = to_document(&changes)?;
        let result = self
            .collection
            .update_one(selector, doc! { "$set": set })
            .await?;

        if result.matched_count > 0 {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
