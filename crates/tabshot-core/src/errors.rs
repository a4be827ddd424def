//! Error handling for tabshot-core
//!
//! Hard failures only: content and count mismatches are not errors, they are
//! reported through the `Reporter` capability and never abort an operation.

use thiserror::Error;

/// Result type alias using SnapError
pub type Result<T> = std::result::Result<T, SnapError>;

/// Canonical error taxonomy for snapshot operations
///
/// Every variant aborts the current `save`/`assert` call. None of them are
/// retried, and none of them cross the operation boundary as panics: the
/// controller converts them to a reported boolean failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapError {
    /// Directory creation, file create/open/read/write, or flush failed
    #[error("I/O failure during {op}: {message}")]
    Io { op: String, message: String },

    /// The row source failed to execute the query or scan a row
    #[error("query failure during {op}: {message}")]
    Query { op: String, message: String },

    /// A row could not be encoded as a canonical JSON line
    #[error("serialization failure: {message}")]
    Serialization { message: String },
}

impl SnapError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SnapError::Io { .. } => "ERR_IO",
            SnapError::Query { .. } => "ERR_QUERY",
            SnapError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

/// Create an I/O error from std::io::Error
pub fn io_error(op: &str, err: std::io::Error) -> SnapError {
    SnapError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a query error
pub fn query_error(op: &str, message: impl Into<String>) -> SnapError {
    SnapError::Query {
        op: op.to_string(),
        message: message.into(),
    }
}

/// Create a serialization error from serde_json::Error
pub fn serialization_error(err: serde_json::Error) -> SnapError {
    SnapError::Serialization {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let cases = [
            (
                io_error(
                    "open",
                    std::io::Error::new(std::io::ErrorKind::Other, "boom"),
                ),
                "ERR_IO",
            ),
            (query_error("scan", "no such table"), "ERR_QUERY"),
            (serialization_error(json_err), "ERR_SERIALIZATION"),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_display_carries_op_context() {
        let err = io_error(
            "create_snapshot_dir",
            std::io::Error::new(std::io::ErrorKind::Other, "denied"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("create_snapshot_dir"));
        assert!(rendered.contains("denied"));
    }
}
