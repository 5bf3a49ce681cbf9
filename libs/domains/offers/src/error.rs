use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, InputError};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OfferError {
    #[error("Offer not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OfferResult<T> = Result<T, OfferError>;

impl From<OfferError> for AppError {
    fn from(err: OfferError) -> Self {
        match err {
            OfferError::NotFound(_) => AppError::NotFound("Offer not found".to_string()),
            OfferError::Validation(msg) => AppError::Validation(msg),
            OfferError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for OfferError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<InputError> for OfferError {
    fn from(err: InputError) -> Self {
        OfferError::Validation(err.to_string())
    }
}

impl From<mongodb::error::Error> for OfferError {
    fn from(err: mongodb::error::Error) -> Self {
        OfferError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for OfferError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        OfferError::Database(err.to_string())
    }
}
