//! # Hive Correlation
//!
//! Submit/watch correlation for hook actions. A Hive action is answered
//! asynchronously: the hook processes the submitted transaction and
//! emits a response transaction later, tagged with the action's
//! reference id. This crate relays signed actions and resolves those
//! responses.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - relay a signed action through the outbound ledger port
//! - poll the hook account's transaction stream on a fixed cadence
//! - decode transactions into hook events with a caller-supplied decoder
//! - resolve each watch to success, rejection, or timeout
//!
//! Every watch is raced against a single deadline timer, so it resolves
//! on schedule even while a ledger query is still in flight. Transaction
//! decoding, signing, and connection management stay outside: the engine
//! sees only the [`LedgerGateway`] port and the decoder closure.
//!
//! ## Module Structure
//!
//! ```text
//! hive-correlation/
//! ├── domain/          # SignedAction, LedgerTransaction, HookEvent, WatchOutcome, errors
//! ├── ports/           # LedgerGateway (outbound) + MockLedgerGateway
//! ├── engine.rs        # CorrelationEngine: submit + watch loop
//! └── config.rs        # CorrelationConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod engine;
pub mod ports;

// Re-exports
pub use config::CorrelationConfig;
pub use domain::{
    new_reference_id, CorrelationError, HookEvent, HookParameter, LedgerTransaction, SignedAction,
    SubmitHandle, SubmitReceipt, TxMemo, WatchOutcome,
};
pub use engine::CorrelationEngine;
pub use ports::{LedgerGateway, MockLedgerGateway};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
