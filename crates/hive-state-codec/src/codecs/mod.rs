//! # Codecs Module
//!
//! Pure wire-format logic: key building, record decoding, lease URIs,
//! candidate ids, and the shared digest/address/numeric helpers they sit
//! on. Everything here is synchronous and deterministic.

pub mod address;
pub mod candidate_id;
pub mod digest;
pub mod lease_uri;
pub mod state_key;
pub mod state_record;
pub mod xfl;
