//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique-constraint violation to a domain conflict.
///
/// Postgres reports the constraint name; SQLite reports table.column.
fn unique_conflict(error_msg: &str) -> (ConflictKind, &'static str) {
    if error_msg.contains("customers_email_key") || error_msg.contains("customers.email") {
        return (ConflictKind::UniqueEmail, "Email already registered");
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %Redacted(&error_msg), "Unique constraint violation");
        let (kind, detail) = unique_conflict(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("violates foreign key constraint")
    {
        warn!(raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool") {
        warn!(raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::map_db_err;
    use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

    #[test]
    fn unique_email_violations_become_conflicts() {
        let err = DbErr::Custom(
            "duplicate key value violates unique constraint \"customers_email_key\"".to_string(),
        );
        assert_eq!(
            map_db_err(err),
            DomainError::conflict(ConflictKind::UniqueEmail, "Email already registered")
        );
    }

    #[test]
    fn foreign_key_violations_become_validation_errors() {
        let err = DbErr::Custom(
            "insert or update on table \"invoices\" violates foreign key constraint".to_string(),
        );
        assert_eq!(
            map_db_err(err),
            DomainError::validation("Foreign key constraint violation")
        );
    }

    #[test]
    fn unknown_errors_collapse_to_a_generic_infra_error() {
        let err = DbErr::Custom("something odd".to_string());
        assert_eq!(
            map_db_err(err),
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
        );
    }
}
