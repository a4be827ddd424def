//! Failure reporting capability
//!
//! The engine never aborts a comparison because rows differ: every mismatch
//! in a run is handed to a `Reporter`, and the host test framework decides
//! how to surface the accumulated failures. Hard operation errors also pass
//! through here (as generic failure messages) so a single sink sees
//! everything that went wrong in one `save`/`assert` call.

use serde_json::Value;

/// Sink for assertion outcomes during snapshot operations
///
/// Implementations must record failures without raising control-flow-altering
/// errors; the current operation always continues past a reported failure.
pub trait Reporter {
    /// Record a hard operation failure (I/O, query, serialization)
    fn fail(&mut self, message: &str);

    /// Assert two JSON texts are structurally equal, recording a failure when
    /// they are not
    ///
    /// Equality is key-order and whitespace insensitive. A text that does not
    /// parse as JSON (including an empty text for a row the source never
    /// produced) can never be equal to anything.
    fn json_eq(&mut self, expected: &str, actual: &str, label: &str);

    /// Assert two counts are equal, recording a failure when they are not
    fn count_eq(&mut self, expected: usize, actual: usize, label: &str);
}

/// Compare two JSON texts structurally
///
/// Returns true only when both parse and their values are equal. Key order
/// and whitespace are irrelevant.
pub fn json_equivalent(expected: &str, actual: &str) -> bool {
    match (
        serde_json::from_str::<Value>(expected),
        serde_json::from_str::<Value>(actual),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// A single recorded failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Hard operation failure, carried as a message
    Operation { message: String },
    /// A stored snapshot line and a freshly computed row differ
    ContentMismatch {
        label: String,
        expected: String,
        actual: String,
    },
    /// Snapshot line count and row source count disagree
    CountMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Operation { message } => write!(f, "{}", message),
            Failure::ContentMismatch {
                label,
                expected,
                actual,
            } => write!(f, "{}: expected {}, got {}", label, expected, actual),
            Failure::CountMismatch {
                label,
                expected,
                actual,
            } => write!(f, "{}: expected {}, got {}", label, expected, actual),
        }
    }
}

/// Reporter that buffers failures as structured values
///
/// Useful from any host test framework: run `save`/`assert`, then drain the
/// buffer and fail the test if it is non-empty.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    failures: Vec<Failure>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures recorded so far, in report order
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// True when no failure has been recorded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Drain the buffer, leaving the reporter empty
    pub fn take_failures(&mut self) -> Vec<Failure> {
        std::mem::take(&mut self.failures)
    }
}

impl Reporter for BufferedReporter {
    fn fail(&mut self, message: &str) {
        self.failures.push(Failure::Operation {
            message: message.to_string(),
        });
    }

    fn json_eq(&mut self, expected: &str, actual: &str, label: &str) {
        if !json_equivalent(expected, actual) {
            self.failures.push(Failure::ContentMismatch {
                label: label.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    fn count_eq(&mut self, expected: usize, actual: usize, label: &str) {
        if expected != actual {
            self.failures.push(Failure::CountMismatch {
                label: label.to_string(),
                expected,
                actual,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_equivalent_ignores_key_order_and_whitespace() {
        assert!(json_equivalent(
            r#"{"a": 1, "b": "x"}"#,
            r#"{"b":"x","a":1}"#
        ));
    }

    #[test]
    fn test_json_equivalent_detects_value_difference() {
        assert!(!json_equivalent(r#"{"a":1}"#, r#"{"a":2}"#));
    }

    #[test]
    fn test_json_equivalent_rejects_non_json() {
        assert!(!json_equivalent(r#"{"a":1}"#, ""));
        assert!(!json_equivalent("", ""));
    }

    #[test]
    fn test_buffered_reporter_records_mismatches() {
        let mut reporter = BufferedReporter::new();
        reporter.json_eq(r#"{"a":1}"#, r#"{"a":1}"#, "line 1");
        reporter.json_eq(r#"{"a":1}"#, r#"{"a":2}"#, "line 2");
        reporter.count_eq(2, 2, "count");
        reporter.count_eq(2, 3, "count");

        let failures = reporter.take_failures();
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], Failure::ContentMismatch { .. }));
        assert!(matches!(
            failures[1],
            Failure::CountMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
        assert!(reporter.is_clean());
    }
}
