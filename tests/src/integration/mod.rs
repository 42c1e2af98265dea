//! # Hive Integration Flows
//!
//! Cross-crate flows: state decoded by `hive-state-codec` feeding
//! submissions correlated by `hive-correlation`.

pub mod correlation_flows;
pub mod state_flows;
