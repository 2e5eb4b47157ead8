use sea_orm::DbErr;
use thiserror::Error;
use tracing::warn;

/// Failures surfaced by the fleet query service.
///
/// Messages name the failing operation only. Driver detail can echo query text
/// or bound values, so it goes to the log and never into the error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage unavailable during {operation}")]
    StorageUnavailable { operation: &'static str },
    #[error("stored data does not match the expected schema during {operation}")]
    SchemaMismatch { operation: &'static str },
    /// Filter input that cannot match anything. The service answers these with
    /// an empty result; the variant never reaches callers of `FleetQueryService`.
    #[error("invalid filter: {0}")]
    InvalidFilter(&'static str),
}

impl ServiceError {
    /// Map a SeaORM error onto the two storage failure kinds.
    pub fn from_db(operation: &'static str, err: &DbErr) -> Self {
        let detail = err.to_string();
        let kind = match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StorageUnavailable { operation },
            _ if is_schema_message(&detail) => Self::SchemaMismatch { operation },
            DbErr::Query(_) | DbErr::Exec(_) => Self::StorageUnavailable { operation },
            _ => Self::SchemaMismatch { operation },
        };
        warn!(operation, error = %detail, kind = kind.kind(), "store_read_failed");
        kind
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StorageUnavailable { .. } => "storage_unavailable",
            Self::SchemaMismatch { .. } => "schema_mismatch",
            Self::InvalidFilter(_) => "invalid_filter",
        }
    }
}

fn is_schema_message(detail: &str) -> bool {
    ["no such table", "no such column", "mismatched types", "error occurred while decoding"]
        .iter()
        .any(|needle| detail.contains(needle))
}
