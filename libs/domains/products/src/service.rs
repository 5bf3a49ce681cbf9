//! Product Service - Business logic layer

use axum_helpers::{ListQuery, NumericInput, RequiredFields, coerce_float, coerce_integer};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, coerce and insert a product, returning its new id.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ObjectId> {
        let product = Product::new(Self::validate(input)?);
        let created = self.repository.create(product).await?;
        Ok(created.id)
    }

    /// One page of products plus the total match count.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ListQuery) -> ProductResult<(Vec<Product>, u64)> {
        let filter = ProductFilter::from(query);
        let total = self.repository.count(filter.clone()).await?;
        let products = self.repository.list(filter).await?;
        Ok((products, total))
    }

    /// Merge supplied fields into an existing product.
    ///
    /// Supplied `estoque`/`valor` are coerced like on create.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<()> {
        let changes = input.into_changes()?;
        if self.repository.update(id, changes).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    fn validate(input: CreateProduct) -> ProductResult<NewProduct> {
        RequiredFields::new()
            .trimmed_text("nome", input.name.as_deref())
            .trimmed_text("codigo", input.code.as_deref())
            .number("estoque", input.stock.as_ref())
            .trimmed_text("categoria", input.category.as_deref())
            .trimmed_text("marca", input.brand.as_deref())
            .number("valor", input.price.as_ref())
            .finish()?;

        let zero = NumericInput::from(0);
        Ok(NewProduct {
            stock: coerce_integer("estoque", input.stock.as_ref().unwrap_or(&zero))?,
            price: coerce_float("valor", input.price.as_ref().unwrap_or(&zero))?,
            name: input.name.unwrap_or_default(),
            code: input.code.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            brand: input.brand.unwrap_or_default(),
            expires_on: input.expires_on,
        })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
