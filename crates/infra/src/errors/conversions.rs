//! Conversions from external infrastructure errors into domain errors.

use mylearn_domain::UserServiceError;
use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub UserServiceError);

impl From<InfraError> for UserServiceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<UserServiceError> for InfraError {
    fn from(value: UserServiceError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoUserServiceError {
    fn into_service_error(self) -> UserServiceError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for SqlError {
    fn into_service_error(self) -> UserServiceError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        UserServiceError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        UserServiceError::Database("database is locked".into())
                    }
                    // SQLITE_CONSTRAINT_PRIMARYKEY / SQLITE_CONSTRAINT_UNIQUE
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        UserServiceError::Database("unique constraint violation".into())
                    }
                    // SQLITE_CONSTRAINT_CHECK
                    (ErrorCode::ConstraintViolation, 275) => {
                        UserServiceError::Database(format!("check constraint violation: {message}"))
                    }
                    _ => UserServiceError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            // Lookups go through `.optional()`, so a missing row here is a storage fault
            RE::QueryReturnedNoRows => {
                UserServiceError::Database("query returned no rows".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                UserServiceError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                UserServiceError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => UserServiceError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => UserServiceError::Database("invalid SQL query".into()),
            other => UserServiceError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_service_error())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for PoolError {
    fn into_service_error(self) -> UserServiceError {
        UserServiceError::Database(format!("failed to acquire database connection: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_service_error())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for JoinError {
    fn into_service_error(self) -> UserServiceError {
        if self.is_panic() {
            UserServiceError::Internal(format!("blocking database task panicked: {self}"))
        } else {
            UserServiceError::Internal(format!("blocking database task cancelled: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_service_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
