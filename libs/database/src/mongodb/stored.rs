//! Tolerant decoding of stored fields.
//!
//! Collections shared with other writers may hold numbers as text, text as
//! numbers, or values of some unrelated type. These helpers decode such a
//! value into the field's type, falling back to the type's default, so one
//! drifted document never fails a whole read.
//!
//! ```ignore
//! #[serde(rename = "estoque", default, deserialize_with = "database::mongodb::loose_i64")]
//! pub stock: i64,
//! ```

use serde::Deserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

enum Stored {
    Int(i64),
    Float(f64),
    Text(String),
    Other,
}

struct StoredVisitor;

impl<'de> Visitor<'de> for StoredVisitor {
    type Value = Stored;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any BSON value")
    }

    fn visit_bool<E>(self, _: bool) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Other)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(v).map_or(Stored::Float(v as f64), Stored::Int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Text(v))
    }

    fn visit_bytes<E>(self, _: &[u8]) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Other)
    }

    fn visit_none<E>(self) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Other)
    }

    fn visit_unit<E>(self) -> Result<Stored, E>
    where
        E: de::Error,
    {
        Ok(Stored::Other)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Stored, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Stored, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Stored::Other)
    }

    // Embedded documents and extended types such as ObjectId or DateTime.
    fn visit_map<A>(self, mut map: A) -> Result<Stored, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Stored::Other)
    }
}

fn stored<'de, D>(deserializer: D) -> Result<Stored, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StoredVisitor)
}

fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .ok()
        .or_else(|| text.replacen(',', ".", 1).parse::<f64>().ok())
        .filter(|f| f.is_finite())
}

/// Integer field; floats are truncated, numeric text is parsed, anything else is `0`.
pub fn loose_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match stored(deserializer)? {
        Stored::Int(n) => n,
        Stored::Float(f) if f.is_finite() => f.trunc() as i64,
        Stored::Text(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| parse_float(&text).map(|f| f.trunc() as i64))
            .unwrap_or_default(),
        _ => 0,
    })
}

/// Float field; integers widen, numeric text is parsed, anything else is `0.0`.
pub fn loose_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match stored(deserializer)? {
        Stored::Int(n) => n as f64,
        Stored::Float(f) if f.is_finite() => f,
        Stored::Text(text) => parse_float(&text).unwrap_or_default(),
        _ => 0.0,
    })
}

/// Text field; numbers are rendered as text, anything else is empty.
pub fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_opt_string(deserializer)?.unwrap_or_default())
}

/// Optional text field; numbers are rendered as text, anything else is `None`.
pub fn loose_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match stored(deserializer)? {
        Stored::Text(text) => Some(text),
        Stored::Int(n) => Some(n.to_string()),
        Stored::Float(f) => Some(f.to_string()),
        Stored::Other => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, Document, doc, from_document, oid::ObjectId};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "loose_i64")]
        count: i64,
        #[serde(default, deserialize_with = "loose_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "loose_string")]
        label: String,
        #[serde(default, deserialize_with = "loose_opt_string")]
        note: Option<String>,
    }

    fn decode(document: Document) -> Record {
        from_document(document).unwrap()
    }

    #[test]
    fn test_typed_values_pass_through() {
        let record = decode(doc! { "count": 5_i64, "amount": 19.9, "label": "a", "note": "n" });
        assert_eq!(record.count, 5);
        assert_eq!(record.amount, 19.9);
        assert_eq!(record.label, "a");
        assert_eq!(record.note.as_deref(), Some("n"));
    }

    #[test]
    fn test_numbers_stored_as_text() {
        let record = decode(doc! { "count": " 7 ", "amount": "19,9" });
        assert_eq!(record.count, 7);
        assert_eq!(record.amount, 19.9);

        let record = decode(doc! { "count": "7.8", "amount": "abc" });
        assert_eq!(record.count, 7);
        assert_eq!(record.amount, 0.0);
    }

    #[test]
    fn test_text_stored_as_numbers() {
        let record = decode(doc! { "label": 12345678000190_i64, "note": 3_i32, "count": 2.9, "amount": 4_i32 });
        assert_eq!(record.label, "12345678000190");
        assert_eq!(record.note.as_deref(), Some("3"));
        assert_eq!(record.count, 2);
        assert_eq!(record.amount, 4.0);
    }

    #[test]
    fn test_unrelated_types_fall_back_to_defaults() {
        let record = decode(doc! {
            "count": [1, 2],
            "amount": { "nested": true },
            "label": ObjectId::new(),
            "note": DateTime::now(),
        });
        assert_eq!(record.count, 0);
        assert_eq!(record.amount, 0.0);
        assert!(record.label.is_empty());
        assert_eq!(record.note, None);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let record = decode(doc! { "count": null, "note": null });
        assert_eq!(record.count, 0);
        assert!(record.label.is_empty());
        assert_eq!(record.note, None);
    }
}
