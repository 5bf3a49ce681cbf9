use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{Company, CompanyFilter, UpdateCompany};

/// Repository trait for Company persistence
///
/// Implementations must reject a second company with the same CNPJ with
/// [`CompanyError::DuplicateCnpj`], on both insert and update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company
    async fn create(&self, company: Company) -> CompanyResult<Company>;

    /// One page of companies matching the filter, newest first
    async fn list(&self, filter: CompanyFilter) -> CompanyResult<Vec<Company>>;

    /// Count companies matching the filter's search, ignoring the window
    async fn count(&self, filter: CompanyFilter) -> CompanyResult<u64>;

    /// Merge the supplied fields. Returns `false` if no company has this id.
    async fn update(&self, id: ObjectId, update: UpdateCompany) -> CompanyResult<bool>;

    /// Returns `false` if no company has this id.
    async fn delete(&self, id: ObjectId) -> CompanyResult<bool>;
}

/// In-memory implementation of CompanyRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryCompanyRepository {
    companies: Arc<RwLock<HashMap<ObjectId, Company>>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(
        companies: &'a HashMap<ObjectId, Company>,
        filter: &'a CompanyFilter,
    ) -> impl Iterator<Item = &'a Company> {
        companies.values().filter(move |c| match &filter.search {
            Some(term) => c.matches(term),
            None => true,
        })
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> CompanyResult<Company> {
        let mut companies = self.companies.write().await;

        if companies.values().any(|c| c.cnpj == company.cnpj) {
            return Err(CompanyError::DuplicateCnpj(company.cnpj));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn list(&self, filter: CompanyFilter) -> CompanyResult<Vec<Company>> {
        let companies = self.companies.read().await;

        let mut result: Vec<Company> = Self::matching(&companies, &filter).cloned().collect();
        result.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(result
            .into_iter()
            .skip(usize::try_from(filter.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(filter.limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self, filter: CompanyFilter) -> CompanyResult<u64> {
        let companies = self.companies.read().await;
        Ok(Self::matching(&companies, &filter).count() as u64)
    }

    async fn update(&self, id: ObjectId, update: UpdateCompany) -> CompanyResult<bool> {
        let mut companies = self.companies.write().await;

        if let Some(cnpj) = &update.cnpj
            && companies.values().any(|c| c.id != id && &c.cnpj == cnpj)
        {
            return Err(CompanyError::DuplicateCnpj(cnpj.clone()));
        }

        match companies.get_mut(&id) {
            Some(company) => {
                company.apply_update(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> CompanyResult<bool> {
        let mut companies = self.companies.write().await;
        Ok(companies.remove(&id).is_some())
    }
}
