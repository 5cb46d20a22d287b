use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure modes of the persistence gateway. Reads report absence as
/// `Option::None`, never as an error.
#[derive(Debug, Error)]
pub enum DataError {
    /// The storage engine rejected a write at commit: duplicate email,
    /// duplicate (location, customer, date) triple, or a dangling foreign
    /// key. The transaction was rolled back.
    #[error("constraint violation: {0}")]
    Conflict(#[source] DbErr),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Splits constraint rejections off from everything else so handlers can map
/// them to the client-visible validation failure.
pub(crate) fn classify(err: DbErr) -> DataError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => DataError::Conflict(err),
        _ => DataError::Db(err),
    }
}
