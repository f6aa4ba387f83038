//! Error types for the FIR benchmark report library.
//!
//! This module defines all error types that can occur while parsing benchmark
//! logs, accumulating result tables, and rendering charts. The input log is a
//! trusted batch artifact, so there is no recovery path: every error aborts
//! the run for its source.

use thiserror::Error;

/// Main error type for the report library.
///
/// All operations that can fail return `Result<T, ReportError>`.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A trigger line was found but its IR-size token is missing or not a
    /// positive integer.
    #[error("malformed trigger line {line}: {message}")]
    MalformedTrigger {
        /// Line number where the error occurred (1-indexed)
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// An expected measurement line is missing, has too few tokens, or
    /// carries a non-numeric duration.
    #[error("malformed measurement line {line}: {message}")]
    MalformedMeasurement {
        /// Line number where the error occurred (1-indexed)
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A chart render was requested but some IR size lacks an entry for one
    /// of the configured algorithms.
    #[error("ragged table: IR size {ir_size} has no entry for algorithm '{algorithm}'")]
    RaggedTable {
        /// The IR size with the incomplete row
        ir_size: u32,
        /// The algorithm missing from that row
        algorithm: String,
    },

    /// Chart drawing or backend failure.
    ///
    /// Plotters errors are generic over the backend, so they are carried here
    /// as rendered strings.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// JSON serialization failed during summary export.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a log source or writing a report artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_trigger_display() {
        let error = ReportError::MalformedTrigger {
            line: 12,
            message: "IR size token 'abc' is not a positive integer".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("line 12"));
        assert!(display.contains("'abc'"));
    }

    #[test]
    fn test_malformed_measurement_display() {
        let error = ReportError::MalformedMeasurement {
            line: 7,
            message: "expected 'Name: value', found 1 token".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("line 7"));
        assert!(display.contains("Name: value"));
    }

    #[test]
    fn test_ragged_table_display() {
        let error = ReportError::RaggedTable {
            ir_size: 64,
            algorithm: "SimdFIR".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("64"));
        assert!(display.contains("'SimdFIR'"));
    }

    #[test]
    fn test_io_error_from() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_error: ReportError = io_error.into();
        assert!(matches!(report_error, ReportError::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
