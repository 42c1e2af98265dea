//! # Hive Client Test Suite
//!
//! Unified test crate for flows that span both library crates.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate flows
//!     ├── state_flows.rs        # key derivation -> record decoding -> re-derivation
//!     └── correlation_flows.rs  # decoded state feeding submit/watch round trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hive-tests
//!
//! # By category
//! cargo test -p hive-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
