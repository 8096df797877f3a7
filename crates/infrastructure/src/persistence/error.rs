//! Shared error mapping for the sqlx persistence layer

use application::error::ApplicationError;

/// Map a sqlx error to an application-layer error
///
/// Failures to obtain or keep a connection are reported as
/// `DatabaseUnavailable`; everything else is a query failure.
pub fn map_sqlx_error(e: sqlx::Error) -> ApplicationError {
    match e {
        sqlx::Error::PoolTimedOut => {
            ApplicationError::DatabaseUnavailable("Timed out acquiring a connection".to_string())
        },
        sqlx::Error::PoolClosed => {
            ApplicationError::DatabaseUnavailable("Connection pool is closed".to_string())
        },
        sqlx::Error::Io(io_err) => {
            ApplicationError::DatabaseUnavailable(format!("Connection failed: {io_err}"))
        },
        sqlx::Error::Database(db_err) => {
            ApplicationError::Database(format!("Database error: {db_err}"))
        },
        other => ApplicationError::Database(format!("Database error: {other}")),
    }
}

/// Report a stored row that does not form a valid entity
pub fn map_row_error(table: &str, e: &domain::DomainError) -> ApplicationError {
    ApplicationError::Database(format!("Malformed {table} row: {e}"))
}
