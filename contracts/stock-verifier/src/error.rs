//! Harness failure taxonomy.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VerifyError>;

/// A verification step that did not observe what it expected.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("{step}: expected revert \"{expected}\" but the call succeeded")]
    UnexpectedSuccess { step: String, expected: &'static str },
    #[error("{step}: expected revert \"{expected}\" but got \"{actual}\"")]
    WrongRevert {
        step: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{step}: expected success but the call reverted with \"{reason}\"")]
    UnexpectedRevert { step: String, reason: &'static str },
    #[error("{step}: call aborted outside the contract error contract: {detail}")]
    Aborted { step: String, detail: String },
    #[error("{step}: {what} mismatch: expected {expected}, got {actual}")]
    Mismatch {
        step: String,
        what: &'static str,
        expected: String,
        actual: String,
    },
    #[error("{step}: rejected call changed state: before {before}, after {after}")]
    StateChanged {
        step: String,
        before: String,
        after: String,
    },
    #[error("invalid verifier configuration: {0}")]
    Config(String),
}
