use axum_helpers::{
    InputError, ListQuery, NumericInput, coerce_float, coerce_integer, lenient_text,
};
use database::mongodb::{loose_f64, loose_i64, loose_opt_string, loose_string};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection holding offers.
pub const COLLECTION: &str = "ofertas";

/// Fields matched by the `q` search parameter.
pub const SEARCH_FIELDS: [&str; 4] = ["produto", "marca", "codigo", "categoria"];

/// Offer entity as stored in MongoDB.
///
/// `product` is free text; offers do not reference product records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "produto", default, deserialize_with = "loose_string")]
    pub product: String,
    #[serde(rename = "marca", default, deserialize_with = "loose_string")]
    pub brand: String,
    #[serde(rename = "codigo", default, deserialize_with = "loose_string")]
    pub code: String,
    #[serde(rename = "estoque", default, deserialize_with = "loose_i64")]
    pub stock: i64,
    #[serde(rename = "categoria", default, deserialize_with = "loose_string")]
    pub category: String,
    /// Offer price
    #[serde(rename = "valor", default, deserialize_with = "loose_f64")]
    pub price: f64,
    #[serde(
        rename = "validade",
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_on: Option<String>,
    #[serde(
        rename = "data_inicio",
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub starts_on: Option<String>,
    #[serde(
        rename = "data_fim",
        default,
        deserialize_with = "loose_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ends_on: Option<String>,
}

impl Offer {
    pub fn new(input: NewOffer) -> Self {
        Self {
            id: ObjectId::new(),
            product: input.product,
            brand: input.brand,
            code: input.code,
            stock: input.stock,
            category: input.category,
            price: input.price,
            expires_on: input.expires_on,
            starts_on: input.starts_on,
            ends_on: input.ends_on,
        }
    }

    /// Case-insensitive substring match over the searchable fields.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.product, &self.brand, &self.code, &self.category]
            .iter()
            .any(|value| value.to_lowercase().contains(&term))
    }

    pub fn apply_changes(&mut self, changes: OfferChanges) {
        if let Some(product) = changes.product {
            self.product = product;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
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
        if let Some(price) = changes.price {
            self.price = price;
        }
        if changes.expires_on.is_some() {
            self.expires_on = changes.expires_on;
        }
        if changes.starts_on.is_some() {
            self.starts_on = changes.starts_on;
        }
        if changes.ends_on.is_some() {
            self.ends_on = changes.ends_on;
        }
    }
}

/// Offer as returned by the API, with a hex `_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfferView {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1d4a3f2c8e7a10")]
    pub id: String,
    #[serde(rename = "produto")]
    #[schema(example = "Café Torrado 500g")]
    pub product: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "estoque")]
    pub stock: i64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "valor")]
    #[schema(example = 12.9)]
    pub price: f64,
    #[serde(rename = "validade", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(rename = "data_inicio", skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<String>,
    #[serde(rename = "data_fim", skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<String>,
}

impl From<Offer> for OfferView {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id.to_hex(),
            product: offer.product,
            brand: offer.brand,
            code: offer.code,
            stock: offer.stock,
            category: offer.category,
            price: offer.price,
            expires_on: offer.expires_on,
            starts_on: offer.starts_on,
            ends_on: offer.ends_on,
        }
    }
}

/// Request body for creating an offer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateOffer {
    #[serde(rename = "produto")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(rename = "marca")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(rename = "codigo")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(rename = "estoque")]
    #[schema(value_type = Option<String>, example = "30")]
    pub stock: Option<NumericInput>,
    #[serde(rename = "categoria")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(rename = "valor")]
    #[schema(value_type = Option<String>, example = "12,90")]
    pub price: Option<NumericInput>,
    #[serde(rename = "validade")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub expires_on: Option<String>,
    #[serde(rename = "data_inicio")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub starts_on: Option<String>,
    #[serde(rename = "data_fim")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub ends_on: Option<String>,
}

/// A create request that passed validation and coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub product: String,
    pub brand: String,
    pub code: String,
    pub stock: i64,
    pub category: String,
    pub price: f64,
    pub expires_on: Option<String>,
    pub starts_on: Option<String>,
    pub ends_on: Option<String>,
}

/// Request body for a partial update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateOffer {
    #[serde(rename = "produto")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(rename = "marca")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(rename = "codigo")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(rename = "estoque")]
    #[schema(value_type = Option<String>, example = "30")]
    pub stock: Option<NumericInput>,
    #[serde(rename = "categoria")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(rename = "valor")]
    #[schema(value_type = Option<String>, example = "12,90")]
    pub price: Option<NumericInput>,
    #[serde(rename = "validade")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub expires_on: Option<String>,
    #[serde(rename = "data_inicio")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub starts_on: Option<String>,
    #[serde(rename = "data_fim")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub ends_on: Option<String>,
}

impl UpdateOffer {
    /// Coerce numeric fields; text fields pass through untouched.
    pub fn into_changes(self) -> Result<OfferChanges, InputError> {
        Ok(OfferChanges {
            product: self.product,
            brand: self.brand,
            code: self.code,
            stock: self
                .stock
                .as_ref()
                .map(|v| coerce_integer("estoque", v))
                .transpose()?,
            category: self.category,
            price: self
                .price
                .as_ref()
                .map(|v| coerce_float("valor", v))
                .transpose()?,
            expires_on: self.expires_on,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        })
    }
}

/// Typed field changes, serialized as a `$set` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfferChanges {
    #[serde(rename = "produto", skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(rename = "marca", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "estoque", skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "valor", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "validade", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(rename = "data_inicio", skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<String>,
    #[serde(rename = "data_fim", skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<String>,
}

impl OfferChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Search and window for listing offers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    pub search: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl From<&ListQuery> for OfferFilter {
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
    use serde_json::json;

    #[test]
    fn test_campaign_dates_round_trip_through_bson() {
        let offer = Offer::new(NewOffer {
            product: "Café".into(),
            brand: "Pilão".into(),
            code: "CF-1".into(),
            stock: 30,
            category: "Mercearia".into(),
            price: 12.9,
            expires_on: None,
            starts_on: Some("2026-10-01".into()),
            ends_on: Some("2026-10-31".into()),
        });
        let doc = mongodb::bson::to_document(&offer).unwrap();
        assert_eq!(doc.get_str("data_inicio").unwrap(), "2026-10-01");
        assert_eq!(doc.get_str("data_fim").unwrap(), "2026-10-31");
        assert!(!doc.contains_key("validade"));

        let back: Offer = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back, offer);
    }

    #[test]
    fn test_drifted_document_loads() {
        let offer: Offer = mongodb::bson::from_document(mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "produto": "Café",
            "estoque": 3.0,
            "valor": 9_i64,
            "data_inicio": mongodb::bson::DateTime::now(),
            "data_fim": "2026-10-31"
        })
        .unwrap();
        assert_eq!(offer.stock, 3);
        assert_eq!(offer.price, 9.0);
        assert_eq!(offer.starts_on, None);
        assert_eq!(offer.ends_on.as_deref(), Some("2026-10-31"));
    }

    #[test]
    fn test_update_coerces_and_keeps_dates() {
        let update: UpdateOffer =
            serde_json::from_value(json!({ "estoque": 7.8, "data_fim": "2026-11-15" })).unwrap();
        let changes = update.into_changes().unwrap();
        assert_eq!(changes.stock, Some(7));
        assert_eq!(changes.ends_on.as_deref(), Some("2026-11-15"));
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_matches_ignores_dates() {
        let offer = Offer::new(NewOffer {
            product: "Café".into(),
            brand: "Pilão".into(),
            code: "CF-1".into(),
            stock: 1,
            category: "Mercearia".into(),
            price: 1.0,
            expires_on: None,
            starts_on: Some("2026-10-01".into()),
            ends_on: None,
        });
        assert!(offer.matches("pilão"));
        assert!(offer.matches("cf-"));
        assert!(!offer.matches("2026"));
    }
}
