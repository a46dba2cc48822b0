//! Error taxonomy shared by the service layer and the HTTP adapters

use thiserror::Error;

use crate::db::DbError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Outcome of a failed request, independent of transport.
///
/// The HTTP mapping lives in `http::error`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed id or body (400)
    #[error("{0}")]
    BadRequest(String),

    /// No row matched the id (404)
    #[error("user {id} not found")]
    NotFound { id: i64 },

    /// Driver or connection failure (500)
    #[error(transparent)]
    Database(DbError),
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_db_error_maps_to_not_found() {
        let err = ApiError::from(DbError::NotFound { id: 7 });
        assert!(matches!(err, ApiError::NotFound { id: 7 }));
    }

    #[test]
    fn driver_error_maps_to_database() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[test]
    fn database_error_displays_raw_driver_message() {
        let raw = sqlx::Error::PoolTimedOut.to_string();
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(err.to_string(), raw);
    }
}
