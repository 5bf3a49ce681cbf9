use axum_helpers::{
    InputError, ListQuery, NumericInput, coerce_float, coerce_integer, lenient_text,
};
use database::mongodb::{loose_f64, loose_i64, loose_opt_string, loose_string};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection holding products.
pub const COLLECTION: &str = "produtos";

/// Fields matched by the `q` search parameter.
pub const SEARCH_FIELDS: [&str; 4] = ["nome", "codigo", "categoria", "marca"];

/// Product entity as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "nome", default, deserialize_with = "loose_string")]
    pub name: String,
    #[serde(rename = "codigo", default, deserialize_with = "loose_string")]
    pub code: String,
    /// Units in stock
    #[serde(rename = "estoque", default, deserialize_with = "loose_i64")]
    pub stock: i64,
    #[serde(rename = "categoria", default, deserialize_with = "loose_string")]
    pub category: String,
    #[serde(rename = "marca", default, deserialize_with = "loose_string")]
    pub brand: String,
    /// Unit price
    #[serde(rename = "valor", default, deserialize_with = "loose_f64")]
    pub price: f64,
    /// Expiry date as entered by the client
    #[serde(
        rename = "validade",
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_on: Option<String>,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            code: input.code,
            stock: input.stock,
            category: input.category,
            brand: input.brand,
            price: input.price,
            expires_on: input.expires_on,
        }
    }

    /// Case-insensitive substring match over the searchable fields.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.name, &self.code, &self.category, &self.brand]
            .iter()
            .any(|value| value.to_lowercase().contains(&term))
    }

    pub fn apply_changes(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(code) = changes.code {
            self.code = code;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if changes.expires_on.is_some() {
            self.expires_on = changes.expires_on;
        }
    }
}

/// Product as returned by the API, with a hex `_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1d4a3f2c8e7a10")]
    pub id: String,
    #[serde(rename = "nome")]
    #[schema(example = "Leite Integral 1L")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "estoque")]
    pub stock: i64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "valor")]
    #[schema(example = 5.49)]
    pub price: f64,
    #[serde(rename = "validade", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            code: product.code,
            stock: product.stock,
            category: product.category,
            brand: product.brand,
            price: product.price,
            expires_on: product.expires_on,
        }
    }
}

/// Request body for creating a product.
///
/// `estoque` and `valor` accept numbers or numeric text (`"19,90"`).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(rename = "nome")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "codigo")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(rename = "estoque")]
    #[schema(value_type = Option<String>, example = "12")]
    pub stock: Option<NumericInput>,
    #[serde(rename = "categoria")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(rename = "marca")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(rename = "valor")]
    #[schema(value_type = Option<String>, example = "19,90")]
    pub price: Option<NumericInput>,
    #[serde(rename = "validade")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub expires_on: Option<String>,
}

/// A create request that passed validation and coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub stock: i64,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub expires_on: Option<String>,
}

/// Request body for a partial update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(rename = "nome")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "codigo")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(rename = "estoque")]
    #[schema(value_type = Option<String>, example = "12")]
    pub stock: Option<NumericInput>,
    #[serde(rename = "categoria")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(rename = "marca")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(rename = "valor")]
    #[schema(value_type = Option<String>, example = "19,90")]
    pub price: Option<NumericInput>,
    #[serde(rename = "validade")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub expires_on: Option<String>,
}

impl UpdateProduct {
    /// Coerce numeric fields; text fields pass through untouched.
    pub fn into_changes(self) -> Result<ProductChanges, InputError> {
        Ok(ProductChanges {
            name: self.name,
            code: self.code,
            stock: self
                .stock
                .as_ref()
                .map(|v| coerce_integer("estoque", v))
                .transpose()?,
            category: self.category,
            brand: self.brand,
            price: self
                .price
                .as_ref()
                .map(|v| coerce_float("valor", v))
                .transpose()?,
            expires_on: self.expires_on,
        })
    }
}

/// Typed field changes, serialized as a `$set` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChanges {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "estoque", skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "marca", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "valor", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "validade", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Search and window for listing products
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl From<&ListQuery> for ProductFilter {
    fn from(query: &ListQuery) -> Self {
        Self {
            search: query.search.clone(),
            skip: query.page.skip(),
            limit: query.page.limit(),
        }
    }
}
