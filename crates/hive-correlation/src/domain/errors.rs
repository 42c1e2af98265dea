//! # Correlation Errors
//!
//! Failures of the submit/watch layer itself. Timeouts and hook
//! rejections are not here: those are resolved watch outcomes, not
//! errors.

use thiserror::Error;

/// Errors surfaced by the correlation engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CorrelationError {
    /// The ledger query inside a watch failed. The watch ends
    /// immediately; no silent retry.
    #[error("ledger query failed: {0}")]
    QueryFailed(String),

    /// The action was not accepted for relay.
    #[error("action submission failed: {0}")]
    SubmitFailed(String),
}
