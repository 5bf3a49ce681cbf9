use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::OfferResult;
use crate::models::{Offer, OfferChanges, OfferFilter};

/// Repository trait for Offer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Insert a new offer
    async fn create(&self, offer: Offer) -> OfferResult<Offer>;

    /// One page of offers matching the filter, newest first
    async fn list(&self, filter: OfferFilter) -> OfferResult<Vec<Offer>>;

    /// Count offers matching the filter's search, ignoring the window
    async fn count(&self, filter: OfferFilter) -> OfferResult<u64>;

    /// Merge the supplied changes. Returns `false` if no offer has this id.
    async fn update(&self, id: ObjectId, changes: OfferChanges) -> OfferResult<bool>;

    /// Returns `false` if no offer has this id.
    async fn delete(&self, id: ObjectId) -> OfferResult<bool>;
}

/// In-memory implementation of OfferRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryOfferRepository {
    offers: Arc<RwLock<HashMap<ObjectId, Offer>>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(
        offers: &'a HashMap<ObjectId, Offer>,
        filter: &'a OfferFilter,
    ) -> impl Iterator<Item = &'a Offer> {
        offers.values().filter(move |p| match &filter.search {
            Some(term) => p.matches(term),
            None => true,
        })
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn create(&self, offer: Offer) -> OfferResult<Offer> {
        let mut offers = self.offers.write().await;
        offers.insert(offer.id, offer.clone());
        Ok(offer)
    }

    async fn list(&self, filter: OfferFilter) -> OfferResult<Vec<Offer>> {
        let offers = self.offers.read().await;

        let mut result: Vec<Offer> = Self::matching(&offers, &filter).cloned().collect();
        result.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(result
            .into_iter()
            .skip(usize::try_from(filter.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(filter.limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self, filter: OfferFilter) -> OfferResult<u64> {
        let offers = self.offers.read().await;
        Ok(Self::matching(&offers, &filter).count() as u64)
    }

    async fn update(&self, id: ObjectId, changes: OfferChanges) -> OfferResult<bool> {
        let mut offers = self.offers.write().await;
        match offers.get_mut(&id) {
            Some(offer) => {
                offer.apply_changes(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> OfferResult<bool> {
        let mut offers = self.offers.write().await;
        Ok(offers.remove(&id).is_some())
    }
}
