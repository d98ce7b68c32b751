//! # Database Error Types
//!
//! Error types for listing operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Connection / Query / DataShape                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow::Error (in CLI) ← Printed, non-zero exit                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are retried: query composition is deterministic, so a
//! retry would reproduce the same failure.

use thiserror::Error;

/// Column position used when the driver does not say which column failed.
pub const UNKNOWN_COLUMN: usize = usize::MAX;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not obtain a connection to the store.
    ///
    /// ## When This Occurs
    /// - Malformed database URL
    /// - Database file missing or unreadable
    /// - Pool acquire timed out, or the pool was closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The store rejected or failed the query.
    ///
    /// ## When This Occurs
    /// - Missing table or column (schema drift)
    /// - Runtime SQL error
    ///
    /// The store's message is kept verbatim.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A returned row does not have the shape the mapper expects.
    ///
    /// ## When This Occurs
    /// - Projection arity changed
    /// - A value cannot be decoded as its declared type
    ///   (e.g. text in the stars column)
    #[error("Unexpected row shape at column {column} ({field}): {reason}")]
    DataShape {
        column: usize,
        field: &'static str,
        reason: String,
    },
}

impl DbError {
    /// Creates a DataShape error for a column position.
    pub fn data_shape(column: usize, field: &'static str, reason: impl Into<String>) -> Self {
        DbError::DataShape {
            column,
            field,
            reason: reason.into(),
        }
    }

    /// True for failures to reach the store at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// Configuration / Io / Tls     → DbError::ConnectionFailed
/// PoolTimedOut / PoolClosed    → DbError::ConnectionFailed
/// Database                     → DbError::QueryFailed (message verbatim)
/// Column* / Decode             → DbError::DataShape
/// Other                        → DbError::QueryFailed
/// ```
///
/// `ColumnDecode` keeps the driver's index. `ColumnNotFound` and `Decode`
/// carry no position and are reported at [`UNKNOWN_COLUMN`]; the mapper
/// reports real positions itself via [`DbError::data_shape`].
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                DbError::ConnectionFailed("Timed out waiting for a pooled connection".to_string())
            }
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::ColumnIndexOutOfBounds { index, len } => DbError::data_shape(
                index,
                "unknown",
                format!("row has only {} columns", len),
            ),
            sqlx::Error::ColumnDecode { index, source } => DbError::data_shape(
                index.parse().unwrap_or(UNKNOWN_COLUMN),
                "unknown",
                source.to_string(),
            ),
            err @ (sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_)) => {
                DbError::data_shape(UNKNOWN_COLUMN, "unknown", err.to_string())
            }

            _ => DbError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_connection_errors() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_connection());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_connection());
    }

    #[test]
    fn test_data_shape_message() {
        let err = DbError::data_shape(5, "stars", "expected integer");
        assert_eq!(
            err.to_string(),
            "Unexpected row shape at column 5 (stars): expected integer"
        );
        assert!(!err.is_connection());
    }

    #[test]
    fn test_column_decode_keeps_driver_index() {
        let err = DbError::from(sqlx::Error::ColumnDecode {
            index: "5".to_string(),
            source: "mismatched types".into(),
        });
        assert!(matches!(err, DbError::DataShape { column: 5, .. }));
    }

    #[test]
    fn test_unpositioned_column_errors_use_unknown_column() {
        let not_found = DbError::from(sqlx::Error::ColumnNotFound("stars".to_string()));
        assert!(matches!(
            not_found,
            DbError::DataShape { column: UNKNOWN_COLUMN, .. }
        ));

        let decode = DbError::from(sqlx::Error::Decode("bad value".into()));
        assert!(matches!(
            decode,
            DbError::DataShape { column: UNKNOWN_COLUMN, .. }
        ));
    }

    #[test]
    fn test_row_not_found_is_not_a_connection_error() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}
