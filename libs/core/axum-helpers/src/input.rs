//! Loose request-body values and required-field checks.
//!
//! Clients send numbers either as JSON numbers or as text (`"12"`,
//! `"19,90"`). [`NumericInput`] accepts both and coerces on demand.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Field '{0}' must be an integer")]
    NotAnInteger(&'static str),

    #[error("Field '{0}' must be a number")]
    NotANumber(&'static str),

    #[error("Invalid value for fields: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
}

/// A JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    /// Empty or whitespace-only text counts as absent.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Integer value; fractional numbers are truncated toward zero.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            }),
            Self::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }

    /// Finite float value; text may use a single decimal comma.
    pub fn to_float(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => {
                let s = s.trim();
                let normalized = if s.matches(',').count() == 1 && !s.contains('.') {
                    s.replace(',', ".")
                } else {
                    s.to_string()
                };
                normalized.parse::<f64>().ok()
            }
        };
        value.filter(|f| f.is_finite())
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Text field that also accepts a JSON number or boolean, stored as its text.
///
/// Use with `#[serde(default, deserialize_with = "lenient_text")]`. Arrays
/// and objects are still rejected.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            Scalar::Text(text) => text,
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }),
    )
}

/// Coerce a required integer field.
pub fn coerce_integer(field: &'static str, value: &NumericInput) -> Result<i64, InputError> {
    value.to_integer().ok_or(InputError::NotAnInteger(field))
}

/// Coerce a required float field.
pub fn coerce_float(field: &'static str, value: &NumericInput) -> Result<f64, InputError> {
    value.to_float().ok_or(InputError::NotANumber(field))
}

/// Collects the names of absent fields, in declaration order.
///
/// ```rust
/// use axum_helpers::input::{InputError, RequiredFields};
///
/// let result = RequiredFields::new()
///     .text("cnpj", Some("123"))
///     .text("email", None)
///     .trimmed_text("nome", Some("   "))
///     .finish();
/// assert_eq!(result, Err(InputError::MissingFields(vec!["email", "nome"])));
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present and non-empty. Whitespace counts as content.
    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.is_none_or(str::is_empty) {
            self.missing.push(name);
        }
        self
    }

    /// Present and non-empty after trimming.
    pub fn trimmed_text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.missing.push(name);
        }
        self
    }

    /// Present and not blank text.
    pub fn number(mut self, name: &'static str, value: Option<&NumericInput>) -> Self {
        if value.is_none_or(NumericInput::is_blank) {
            self.missing.push(name);
        }
        self
    }

    pub fn finish(self) -> Result<(), InputError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::MissingFields(self.missing))
        }
    }
}
