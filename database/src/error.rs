use std::fmt::Display;

use thiserror::Error;

/// Every failure the database layer can report. Callers match on the variant, never on the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatabaseError {
    /// Input failed one of the person validation rules
    #[error("{0}")]
    Validation(String),

    /// Id is not in the identifier format the store accepts
    #[error("Malformatted id: {0}")]
    MalformedIdentifier(String),

    /// Store level failure unrelated to the input
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

pub fn persistence_error(err: impl Display) -> DatabaseError {
    DatabaseError::Persistence(err.to_string())
}
