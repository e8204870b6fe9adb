//! Failure types for grammar application
//!
//! A `ParseFailure` is an ordinary, recoverable outcome of applying a
//! grammar to malformed protocol input, never a panic. Each variant
//! carries the byte offset where recognition stopped and maps to a
//! stable diagnostic code.

use crate::codes::{self, Code};
use serde::{Deserialize, Serialize};

/// Result type for grammar application
pub type ParseResult<T> = Result<T, ParseFailure>;

/// Recoverable failure of one grammar application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ParseFailure {
    #[error("expected {expected} at byte {offset}")]
    Expected { expected: String, offset: usize },

    #[error("{reason} at byte {offset}")]
    Malformed { reason: String, offset: usize },

    #[error("no alternative matched at byte {offset}: {summary}")]
    NoAlternative { summary: String, offset: usize },

    #[error("list requires at least {min_count} element(s), found {found} at byte {offset}")]
    TooFewItems {
        min_count: usize,
        found: usize,
        offset: usize,
    },

    #[error("unexpected trailing input {trailing:?} at byte {offset}")]
    TrailingInput { trailing: String, offset: usize },
}

impl ParseFailure {
    /// Create an expectation failure
    pub fn expected(expected: &str, offset: usize) -> Self {
        Self::Expected {
            expected: expected.to_string(),
            offset,
        }
    }

    /// Create a malformed-input failure
    pub fn malformed(reason: &str, offset: usize) -> Self {
        Self::Malformed {
            reason: reason.to_string(),
            offset,
        }
    }

    /// Create an exhausted-alternatives failure
    pub fn no_alternative(summary: String, offset: usize) -> Self {
        Self::NoAlternative { summary, offset }
    }

    /// Create an unmet-minimum-count failure
    pub fn too_few_items(min_count: usize, found: usize, offset: usize) -> Self {
        Self::TooFewItems {
            min_count,
            found,
            offset,
        }
    }

    /// Create a trailing-input failure
    pub fn trailing_input(trailing: &str, offset: usize) -> Self {
        Self::TrailingInput {
            trailing: trailing.to_string(),
            offset,
        }
    }

    /// Byte offset where recognition stopped
    pub fn offset(&self) -> usize {
        match self {
            Self::Expected { offset, .. }
            | Self::Malformed { offset, .. }
            | Self::NoAlternative { offset, .. }
            | Self::TooFewItems { offset, .. }
            | Self::TrailingInput { offset, .. } => *offset,
        }
    }

    /// Diagnostic code for the notices subsystem
    pub fn code(&self) -> Code {
        match self {
            Self::Expected { .. } => codes::parse::EXPECTED_SYNTAX,
            Self::Malformed { .. } => codes::parse::MALFORMED_VALUE,
            Self::NoAlternative { .. } => codes::parse::NO_ALTERNATIVE,
            Self::TooFewItems { .. } => codes::parse::TOO_FEW_LIST_ITEMS,
            Self::TrailingInput { .. } => codes::parse::TRAILING_INPUT,
        }
    }
}
