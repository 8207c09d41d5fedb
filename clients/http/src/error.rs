use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use database::error::DatabaseError;
use serde::Serialize;
use thiserror::Error;

/// Single place where request failures become HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformatted id")]
    MalformedIdentifier(String),

    #[error("Id Not Found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unknown Endpoint")]
    UnknownEndpoint,

    /// Not shaped into the JSON error body, surfaces as a plain 500
    #[error("Internal Server Error")]
    Persistence(String),
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Validation(message) => ApiError::Validation(message),
            DatabaseError::MalformedIdentifier(id) => ApiError::MalformedIdentifier(id),
            DatabaseError::Persistence(message) => ApiError::Persistence(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedIdentifier(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Persistence(message) => {
                log::error!("Unhandled persistence failure: {}", message);

                HttpResponse::build(self.status_code())
                    .insert_header(ContentType::plaintext())
                    .body(self.to_string())
            }
            ApiError::MalformedIdentifier(_)
            | ApiError::NotFound(_)
            | ApiError::Validation(_)
            | ApiError::UnknownEndpoint => {
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: self.to_string(),
                })
            }
        }
    }
}
