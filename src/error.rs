use chrono::NaiveDateTime;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by the store.
///
/// Constraint failures the engine reports are lifted out of
/// `diesel::result::Error` into their own variants so callers can match
/// on a primary-key collision or a length overflow without digging
/// through database error info.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("missing required value: {0}")]
    MissingValue(String),

    #[error("value rejected by check constraint: {0}")]
    ValueRejected(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("due date {due} is earlier than start date {start}")]
    InvalidDateRange {
        start: NaiveDateTime,
        due: NaiveDateTime,
    },

    #[error("database error: {0}")]
    Database(DieselError),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("DATABASE_URL env variable must be set")]
    DatabaseUrlMissing,
}

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StoreError::DuplicateKey(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
                StoreError::MissingValue(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                StoreError::ValueRejected(info.message().to_string())
            }
            other => StoreError::Database(other),
        }
    }
}
