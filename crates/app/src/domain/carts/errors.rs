//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// SQLSTATE raised when a total does not fit its column.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("cart total out of range")]
    TotalOverflow,

    #[error("conflicting cart update")]
    Conflict,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if let Error::Encode(_) = error {
            return Self::InvalidData;
        }

        if error.as_database_error().and_then(DatabaseError::code).as_deref()
            == Some(NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::TotalOverflow;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_storage_errors() {
        let error = CartsServiceError::from(Error::Io(std::io::Error::other("reset")));

        assert!(
            matches!(error, CartsServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn encode_errors_map_to_invalid_data() {
        let error = CartsServiceError::from(Error::Encode("items".into()));

        assert!(
            matches!(error, CartsServiceError::InvalidData),
            "expected InvalidData, got {error:?}"
        );
    }
}
