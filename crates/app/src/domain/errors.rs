//! Repository errors shared by every storage-backed collaborator.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage error")]
    Sql(#[source] Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid stored value for {column}: {value}")]
    InvalidData { column: &'static str, value: String },

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl From<Error> for RepositoryError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlx_errors_are_wrapped_as_storage_errors() {
        let error = RepositoryError::from(Error::RowNotFound);

        assert!(matches!(error, RepositoryError::Sql(Error::RowNotFound)));
        assert_eq!(error.to_string(), "storage error");
    }
}
