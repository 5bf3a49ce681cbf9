//! MongoDB implementation of CompanyRepository

use async_trait::async_trait;
use database::mongodb::{is_duplicate_key_error, optional_search_filter};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, oid::ObjectId, to_document},
    options::{FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{COLLECTION, Company, CompanyFilter, SEARCH_FIELDS, UpdateCompany};
use crate::repository::CompanyRepository;

/// Name of the unique index backing CNPJ uniqueness.
pub const CNPJ_INDEX: &str = "idx_cnpj_unique";

/// MongoDB implementation of the CompanyRepository
pub struct MongoCompanyRepository {
    collection: Collection<Company>,
}

impl MongoCompanyRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoCompanyRepository::new(client.database("ofertmatch"));
    /// repo.init_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Company>(COLLECTION),
        }
    }

    /// Create the unique CNPJ index. Idempotent.
    ///
    /// Fails if the collection already holds duplicate CNPJs.
    pub async fn init_indexes(&self) -> CompanyResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "cnpj": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(CNPJ_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(collection = COLLECTION, "Company indexes initialized");
        Ok(())
    }

    fn build_filter(filter: &CompanyFilter) -> Document {
        optional_search_filter(filter.search.as_deref(), &SEARCH_FIELDS)
    }

    fn map_write_error(err: mongodb::error::Error, cnpj: Option<&str>) -> CompanyError {
        if is_duplicate_key_error(&err) {
            CompanyError::DuplicateCnpj(cnpj.unwrap_or_default().to_string())
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl CompanyRepository for MongoCompanyRepository {
    #[instrument(skip(self, company), fields(cnpj = %company.cnpj))]
    async fn create(&self, company: Company) -> CompanyResult<Company> {
        self.collection
            .insert_one(&company)
            .await
            .map_err(|e| Self::map_write_error(e, Some(&company.cnpj)))?;

        tracing::info!(company_id = %company.id, "Company created successfully");
        Ok(company)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: CompanyFilter) -> CompanyResult<Vec<Company>> {
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
        let companies: Vec<Company> = cursor.try_collect().await?;

        Ok(companies)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: CompanyFilter) -> CompanyResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(&filter))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: ObjectId, update: UpdateCompany) -> CompanyResult<bool> {
        let selector = doc! { "_id": id };

        if update.is_empty() {
            let count = self.collection.count_documents(selector).await?;
            return Ok(count > 0);
        }

        let changes = to_document(&update)?;
        let result = self
            .collection
            .update_one(selector, doc! { "$set": changes })
            .await
            .map_err(|e| Self::map_write_error(e, update.cnpj.as_deref()))?;

        if result.matched_count > 0 {
            tracing::info!(company_id = %id, "Company updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> CompanyResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(company_id = %id, "Company deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoCompanyRepository::build_filter(&CompanyFilter::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_search() {
        let filter = CompanyFilter {
            search: Some("acme".to_string()),
            ..Default::default()
        };
        let doc = MongoCompanyRepository::build_filter(&filter);
        let clauses = doc.get_array("$or").unwrap();
        assert_eq!(clauses.len(), SEARCH_FIELDS.len());
    }
}
