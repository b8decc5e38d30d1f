use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Constraint violations caused by client input become typed errors
/// (`Duplicate`, `Validation`); everything else is a `Database` error whose
/// driver message stays in the source chain.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "Resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();

        match kind {
            DatabaseErrorKind::UniqueViolation => match ConstraintParser::parse_unique_violation(
                message,
                info.details(),
                info.table_name(),
                info.constraint_name(),
            ) {
                Some((entity, field, value)) => AppError::Duplicate {
                    entity,
                    field,
                    value,
                },
                None => Self::opaque(operation, "Unique constraint violation", message),
            },
            DatabaseErrorKind::NotNullViolation => match ConstraintParser::parse_not_null_violation(
                message,
                info.table_name(),
                info.column_name(),
            ) {
                Some((entity, field)) => AppError::Validation {
                    field,
                    reason: format!("Field is required for {}", entity),
                },
                None => Self::opaque(operation, "Not null constraint violation", message),
            },
            _ => Self::opaque(operation, "Database error", message),
        }
    }

    fn opaque(operation: &str, kind: &str, message: &str) -> AppError {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", kind, message)),
        }
    }
}
