//! Defines the error types used throughout the GitParse library.
use thiserror::Error;

/// Represents errors that can occur while turning git output into structured data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GitError {
    /// The command string ended while a quoted section was still open.
    /// `position` is the byte offset of the opening quote character.
    #[error("Unclosed {quote} quote starting at byte {position}")]
    UnclosedQuote { quote: char, position: usize },

    /// A commit segment of raw log output lacks a mandatory field or holds one
    /// that cannot be decoded. `segment` is the zero-based index of the segment.
    #[error("Malformed commit in segment {segment}: {reason}")]
    MalformedCommit { segment: usize, reason: String },

    /// The provided string is not a full hexadecimal object id.
    #[error("Object id is invalid: {0}")]
    InvalidObjectId(String),

    /// An author or committer line could not be split into name, email and date.
    #[error("Identity line is invalid: {0}")]
    InvalidSignature(String),

    /// A branch filter pattern is not a valid regular expression.
    #[error("Branch filter pattern is invalid: {0}")]
    InvalidPattern(String),
}
