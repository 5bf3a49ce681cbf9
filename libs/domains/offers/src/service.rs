//! Offer Service - Business logic layer

use axum_helpers::{ListQuery, NumericInput, RequiredFields, coerce_float, coerce_integer};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{OfferError, OfferResult};
use crate::models::{CreateOffer, NewOffer, Offer, OfferFilter, UpdateOffer};
use crate::repository::OfferRepository;

/// Offer service providing business logic operations
pub struct OfferService<R: OfferRepository> {
    repository: Arc<R>,
}

impl<R: OfferRepository> OfferService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, coerce and insert an offer, returning its new id.
    ///
    /// Campaign dates are optional and stored as sent.
    #[instrument(skip(self, input))]
    pub async fn create_offer(&self, input: CreateOffer) -> OfferResult<ObjectId> {
        let offer = Offer::new(Self::validate(input)?);
        let created = self.repository.create(offer).await?;
        Ok(created.id)
    }

    /// One page of offers plus the total match count.
    #[instrument(skip(self))]
    pub async fn list_offers(&self, query: &ListQuery) -> OfferResult<(Vec<Offer>, u64)> {
        let filter = OfferFilter::from(query);
        let total = self.repository.count(filter.clone()).await?;
        let offers = self.repository.list(filter).await?;
        Ok((offers, total))
    }

    /// Merge supplied fields into an existing offer.
    ///
    /// Supplied `estoque`/`valor` are coerced like on create.
    #[instrument(skip(self, input))]
    pub async fn update_offer(&self, id: ObjectId, input: UpdateOffer) -> OfferResult<()> {
        let changes = input.into_changes()?;
        if self.repository.update(id, changes).await? {
            Ok(())
        } else {
            Err(OfferError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_offer(&self, id: ObjectId) -> OfferResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(OfferError::NotFound(id))
        }
    }

    fn validate(input: CreateOffer) -> OfferResult<NewOffer> {
        RequiredFields::new()
            .trimmed_text("produto", input.product.as_deref())
            .trimmed_text("marca", input.brand.as_deref())
            .trimmed_text("codigo", input.code.as_deref())
            .number("estoque", input.stock.as_ref())
            .trimmed_text("categoria", input.category.as_deref())
            .number("valor", input.price.as_ref())
            .finish()?;

        let zero = NumericInput::from(0);
        Ok(NewOffer {
            stock: coerce_integer("estoque", input.stock.as_ref().unwrap_or(&zero))?,
            price: coerce_float("valor", input.price.as_ref().unwrap_or(&zero))?,
            product: input.product.unwrap_or_default(),
            brand: input.brand.unwrap_or_default(),
            code: input.code.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            expires_on: input.expires_on,
            starts_on: input.starts_on,
            ends_on: input.ends_on,
        })
    }
}

impl<R: OfferRepository> Clone for OfferService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
