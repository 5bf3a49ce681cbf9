//! Company Service - Business logic layer

use axum_helpers::{ListQuery, RequiredFields};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{Company, CompanyFilter, CreateCompany, NewCompany, UpdateCompany};
use crate::repository::CompanyRepository;

/// Company service providing business logic operations
pub struct CompanyService<R: CompanyRepository> {
    repository: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and insert a company, returning its new id.
    ///
    /// CNPJ uniqueness is enforced by the repository.
    #[instrument(skip(self, input))]
    pub async fn create_company(&self, input: CreateCompany) -> CompanyResult<ObjectId> {
        let company = Company::new(Self::validate(input)?);
        let created = self.repository.create(company).await?;
        Ok(created.id)
    }

    /// One page of companies plus the total match count.
    #[instrument(skip(self))]
    pub async fn list_companies(&self, query: &ListQuery) -> CompanyResult<(Vec<Company>, u64)> {
        let filter = CompanyFilter::from(query);
        let total = self.repository.count(filter.clone()).await?;
        let companies = self.repository.list(filter).await?;
        Ok((companies, total))
    }

    /// Merge supplied fields into an existing company.
    #[instrument(skip(self, input))]
    pub async fn update_company(&self, id: ObjectId, input: UpdateCompany) -> CompanyResult<()> {
        if self.repository.update(id, input).await? {
            Ok(())
        } else {
            Err(CompanyError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: ObjectId) -> CompanyResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CompanyError::NotFound(id))
        }
    }

    fn validate(input: CreateCompany) -> CompanyResult<NewCompany> {
        RequiredFields::new()
            .text("razao_social", input.legal_name.as_deref())
            .text("cnpj", input.cnpj.as_deref())
            .text("endereco", input.address.as_deref())
            .text("email", input.email.as_deref())
            .text("responsavel", input.contact_person.as_deref())
            .finish()?;

        Ok(NewCompany {
            legal_name: input.legal_name.unwrap_or_default(),
            cnpj: input.cnpj.unwrap_or_default(),
            address: input.address.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            contact_person: input.contact_person.unwrap_or_default(),
        })
    }
}

impl<R: CompanyRepository> Clone for CompanyService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCompanyRepository;
    use axum_helpers::PageRequest;
    use mockall::predicate;

    fn valid_input() -> CreateCompany {
        CreateCompany {
            legal_name: Some("Acme".into()),
            cnpj: Some("12345678000190".into()),
            address: Some("Rua A, 1".into()),
            email: Some("contato@acme.test".into()),
            contact_person: Some("Maria".into()),
        }
    }

    #[tokio::test]
    async fn test_create_company_success() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_create()
            .withf(|c| c.cnpj == "12345678000190" && c.legal_name == "Acme")
            .times(1)
            .returning(|c| Ok(c));

        let service = CompanyService::new(mock_repo);
        assert!(service.create_company(valid_input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_company_missing_fields() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_create().never();

        let service = CompanyService::new(mock_repo);
        let input = CreateCompany {
            cnpj: Some(String::new()),
            email: None,
            ..valid_input()
        };

        match service.create_company(input).await {
            Err(CompanyError::Validation(msg)) => {
                assert_eq!(msg, "Missing required fields: cnpj, email");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_company_whitespace_counts_as_present() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_create().times(1).returning(|c| Ok(c));

        let service = CompanyService::new(mock_repo);
        let input = CreateCompany {
            address: Some(" ".into()),
            ..valid_input()
        };
        assert!(service.create_company(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_company_duplicate_cnpj() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_create()
            .returning(|c| Err(CompanyError::DuplicateCnpj(c.cnpj)));

        let service = CompanyService::new(mock_repo);
        let result = service.create_company(valid_input()).await;
        assert!(matches!(result, Err(CompanyError::DuplicateCnpj(_))));
    }

    #[tokio::test]
    async fn test_list_companies_passes_window() {
        let mut mock_repo = MockCompanyRepository::new();
        let expected = CompanyFilter {
            search: Some("acme".into()),
            skip: 10,
            limit: 5,
        };
        mock_repo
            .expect_count()
            .with(predicate::eq(expected.clone()))
            .returning(|_| Ok(12));
        mock_repo
            .expect_list()
            .with(predicate::eq(expected))
            .returning(|_| Ok(vec![]));

        let service = CompanyService::new(mock_repo);
        let query = ListQuery {
            page: PageRequest::new(3, 5),
            search: Some("acme".into()),
        };
        let (companies, total) = service.list_companies(&query).await.unwrap();
        assert!(companies.is_empty());
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_update_company_not_found() {
        let mut mock_repo = MockCompanyRepository::new();
        let id = ObjectId::new();
        mock_repo
            .expect_update()
            .with(predicate::eq(id), predicate::always())
            .returning(|_, _| Ok(false));

        let service = CompanyService::new(mock_repo);
        let result = service.update_company(id, UpdateCompany::default()).await;
        assert!(matches!(result, Err(CompanyError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_company_success() {
        let mut mock_repo = MockCompanyRepository::new();
        let id = ObjectId::new();
        mock_repo
            .expect_delete()
            .with(predicate::eq(id))
            .times(1)
            .returning(|_| Ok(true));

        let service = CompanyService::new(mock_repo);
        assert!(service.delete_company(id).await.is_ok());
    }
}
