//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert to
//! `crate::errors::domain::DomainError` through this single mapping so the
//! retry classification (unavailable vs. everything else) stays in one place.

use tracing::warn;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::RecordNotUpdated => {
            // Update targeted a row that no longer exists
            DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not updated (row missing)",
            )
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(error = %e, "database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ => {
            warn!(error = %e, "unexpected database error");
            DomainError::infra(InfraErrorKind::Other("Db".into()), e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::map_db_err;
    use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("gone".into()));
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::Other(_), _)));
    }

    #[test]
    fn conn_err_maps_to_db_unavailable() {
        let err = map_db_err(sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "refused".into(),
        )));
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::DbUnavailable, _)
        ));
    }
}
