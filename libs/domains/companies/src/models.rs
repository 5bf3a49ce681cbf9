use axum_helpers::{ListQuery, lenient_text};
use database::mongodb::{loose_string};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection holding companies.
pub const COLLECTION: &str = "empresas";

/// Fields matched by the `q` search parameter.
pub const SEARCH_FIELDS: [&str; 5] = ["razao_social", "cnpj", "endereco", "email", "responsavel"];

/// Company entity as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "razao_social", default, deserialize_with = "loose_string")]
    pub legal_name: String,
    /// Tax registration number, unique across companies
    #[serde(default, deserialize_with = "loose_string")]
    pub cnpj: String,
    #[serde(rename = "endereco", default, deserialize_with = "loose_string")]
    pub address: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: String,
    #[serde(rename = "responsavel", default, deserialize_with = "loose_string")]
    pub contact_person: String,
}

impl Company {
    pub fn new(input: NewCompany) -> Self {
        Self {
            id: ObjectId::new(),
            legal_name: input.legal_name,
            cnpj: input.cnpj,
            address: input.address,
            email: input.email,
            contact_person: input.contact_person,
        }
    }

    /// Case-insensitive substring match over the searchable fields.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [
            &self.legal_name,
            &self.cnpj,
            &self.address,
            &self.email,
            &self.contact_person,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(&term))
    }

    pub fn apply_update(&mut self, update: UpdateCompany) {
        if let Some(legal_name) = update.legal_name {
            self.legal_name = legal_name;
        }
        if let Some(cnpj) = update.cnpj {
            self.cnpj = cnpj;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(contact_person) = update.contact_person {
            self.contact_person = contact_person;
        }
    }
}

/// Company as returned by the API, with a hex `_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyView {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1d4a3f2c8e7a10")]
    pub id: String,
    #[serde(rename = "razao_social")]
    #[schema(example = "Acme Comércio LTDA")]
    pub legal_name: String,
    #[schema(example = "12345678000190")]
    pub cnpj: String,
    #[serde(rename = "endereco")]
    pub address: String,
    pub email: String,
    #[serde(rename = "responsavel")]
    pub contact_person: String,
}

impl From<Company> for CompanyView {
    fn from(company: Company) -> Self {
        Self {
            id: company.id.to_hex(),
            legal_name: company.legal_name,
            cnpj: company.cnpj,
            address: company.address,
            email: company.email,
            contact_person: company.contact_person,
        }
    }
}

/// Request body for creating a company. Every field is required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCompany {
    #[serde(rename = "razao_social")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub legal_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cnpj: Option<String>,
    #[serde(rename = "endereco")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(rename = "responsavel")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub contact_person: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub legal_name: String,
    pub cnpj: String,
    pub address: String,
    pub email: String,
    pub contact_person: String,
}

/// Partial update; only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompany {
    #[serde(rename = "razao_social", skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub cnpj: Option<String>,
    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(rename = "responsavel", skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub contact_person: Option<String>,
}

impl UpdateCompany {
    pub fn is_empty(&self) -> bool {
        self.legal_name.is_none()
            && self.cnpj.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.contact_person.is_none()
    }
}

/// Search and window for listing companies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    pub search: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl From<&ListQuery> for CompanyFilter {
    fn from(query: &ListQuery) -> Self {
        Self {
            search: query.search.clone(),
            skip: query.page.skip(),
            limit: query.page.limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Company {
        Company::new(NewCompany {
            legal_name: "Acme Comércio".into(),
            cnpj: "12345678000190".into(),
            address: "Rua A, 1".into(),
            email: "contato@acme.test".into(),
            contact_person: "Maria".into(),
        })
    }

    #[test]
    fn test_stored_field_names() {
        let doc = mongodb::bson::to_document(&sample()).unwrap();
        for key in ["_id", "razao_social", "cnpj", "endereco", "email", "responsavel"] {
            assert!(doc.contains_key(key), "missing {key}");
        }
        assert!(doc.get_object_id("_id").is_ok());
    }

    #[test]
    fn test_legacy_document_defaults() {
        let id = ObjectId::new();
        let company: Company =
            mongodb::bson::from_document(mongodb::bson::doc! { "_id": id, "cnpj": "1" }).unwrap();
        assert_eq!(company.id, id);
        assert_eq!(company.cnpj, "1");
        assert!(company.legal_name.is_empty());
    }

    #[test]
    fn test_drifted_document_loads() {
        let company: Company = mongodb::bson::from_document(mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "razao_social": "Acme",
            "cnpj": 12345678000190_i64,
            "email": mongodb::bson::Bson::Null,
            "responsavel": ["Maria"]
        })
        .unwrap();
        assert_eq!(company.cnpj, "12345678000190");
        assert!(company.email.is_empty());
        assert!(company.contact_person.is_empty());
        assert!(company.matches("000190"));
    }

    #[test]
    fn test_view_uses_hex_id() {
        let company = sample();
        let hex = company.id.to_hex();
        let json = serde_json::to_value(CompanyView::from(company)).unwrap();
        assert_eq!(json["_id"], hex);
        assert_eq!(json["razao_social"], "Acme Comércio");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let company = sample();
        assert!(company.matches("ACME"));
        assert!(company.matches("maria"));
        assert!(company.matches("000190"));
        assert!(!company.matches("globex"));
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = UpdateCompany {
            email: Some("novo@acme.test".into()),
            ..Default::default()
        };
        let doc = mongodb::bson::to_document(&update).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("email").unwrap(), "novo@acme.test");
        assert!(UpdateCompany::default().is_empty());
    }

    #[test]
    fn test_apply_update_merges() {
        let mut company = sample();
        company.apply_update(UpdateCompany {
            contact_person: Some("João".into()),
            ..Default::default()
        });
        assert_eq!(company.contact_person, "João");
        assert_eq!(company.email, "contato@acme.test");
    }
}
