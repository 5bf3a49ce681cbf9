//! MongoDB implementation of OfferRepository

use async_trait::async_trait;
use database::mongodb::optional_search_filter;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId, to_document},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::OfferResult;
use crate::models::{COLLECTION, Offer, OfferChanges, OfferFilter, SEARCH_FIELDS};
use crate::repository::OfferRepository;

/// MongoDB implementation of the OfferRepository
pub struct MongoOfferRepository {
    collection: Collection<Offer>,
}

impl MongoOfferRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Offer>(COLLECTION),
        }
    }

    fn build_filter(filter: &OfferFilter) -> Document {
        optional_search_filter(filter.search.as_deref(), &SEARCH_FIELDS)
    }
}

#[async_trait]
impl OfferRepository for MongoOfferRepository {
    #[instrument(skip(self, offer), fields(code = %offer.code))]
    async fn create(&self, offer: Offer) -> OfferResult<Offer> {
        self.collection.insert_one(&offer).await?;

        tracing::info!(offer_id = %offer.id, "Offer created successfully");
        Ok(offer)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: OfferFilter) -> OfferResult<Vec<Offer>> {
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
        let offers: Vec<Offer> = cursor.try_collect().await?;

        Ok(offers)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: OfferFilter) -> OfferResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(&filter))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: ObjectId, changes: OfferChanges) -> OfferResult<bool> {
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
            tracing::info!(offer_id = %id, "Offer updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> OfferResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(offer_id = %id, "Offer deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
