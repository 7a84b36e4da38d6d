use crate::domain::errors::DomainError;

/// Store faults surface as `Persistence` and become internal errors at the
/// HTTP boundary; uniqueness is enforced by pre-queries, not constraints,
/// so there are no constraint names to translate here.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
