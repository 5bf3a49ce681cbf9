use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, InputError};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Company not found: {0}")]
    NotFound(ObjectId),

    #[error("CNPJ '{0}' already registered")]
    DuplicateCnpj(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CompanyResult<T> = Result<T, CompanyError>;

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(_) => AppError::NotFound("Company not found".to_string()),
            CompanyError::DuplicateCnpj(_) => {
                AppError::Conflict("CNPJ already registered".to_string())
            }
            CompanyError::Validation(msg) => AppError::Validation(msg),
            CompanyError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<InputError> for CompanyError {
    fn from(err: InputError) -> Self {
        CompanyError::Validation(err.to_string())
    }
}

impl From<mongodb::error::Error> for CompanyError {
    fn from(err: mongodb::error::Error) -> Self {
        CompanyError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CompanyError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CompanyError::Database(err.to_string())
    }
}
