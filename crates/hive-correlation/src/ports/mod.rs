//! # Ports Module
//!
//! Outbound dependency traits and their test doubles.

pub mod outbound;

pub use outbound::*;
