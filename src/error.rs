//! Error kinds reported by the analyzer.
//!
//! None of these are fatal to a run: a failing source is skipped, an
//! overflowing registry or lexicon drops only the new entries, and a bad
//! request abandons just that request.

use thiserror::Error;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The source is missing or could not be read.
    #[error("cannot open {path}: {reason}")]
    InputUnavailable { path: String, reason: String },

    /// The source exists but holds zero bytes.
    #[error("the file '{path}' is empty")]
    EmptyInput { path: String },

    /// A registry or lexicon limit was reached; new entries past it are dropped.
    #[error("{what} limit of {limit} reached, further new entries are dropped")]
    CapacityExceeded { what: &'static str, limit: usize },

    /// A request carried an argument that cannot be used, e.g. a non-numeric count.
    #[error("invalid request '{input}': {reason}")]
    MalformedRequest { input: String, reason: String },
}

impl AnalysisError {
    pub fn input_unavailable(path: impl Into<String>, reason: impl ToString) -> Self {
        AnalysisError::InputUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedRequest {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = AnalysisError::EmptyInput {
            path: "tweets.csv".to_string(),
        };
        assert_eq!(e.to_string(), "the file 'tweets.csv' is empty");

        let e = AnalysisError::malformed("ten", "expected a non-negative whole number");
        assert!(e.to_string().contains("'ten'"));

        let e = AnalysisError::CapacityExceeded {
            what: "registry",
            limit: 3,
        };
        assert!(e.to_string().starts_with("registry limit of 3"));
    }
}
