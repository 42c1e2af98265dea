//! # Hive State Codec
//!
//! Wire format of the Hive registry's on-ledger hook state: canonical
//! key derivation, record decoding, lease URI parsing, and governance
//! candidate identities.
//!
//! **Architecture:** Hexagonal (domain types + pure codec functions)
//!
//! ## Purpose
//!
//! The registry hook keeps every host registration, lease offer, and
//! governance candidate in the ledger's generic key/value hook state.
//! This crate is the client-side reading of that state:
//! - build the 32-byte keys entries live under
//! - derive the salted storage index the ledger files a key at
//! - decode entry payloads into typed records at fixed big-endian offsets
//! - parse lease URI tokens in both deployed encodings
//! - construct and recognize the three candidate id shapes
//!
//! All of it is synchronous, deterministic, and allocation-light; the
//! async submit/watch layer lives in its own crate.
//!
//! ## Module Structure
//!
//! ```text
//! hive-state-codec/
//! ├── domain/          # StateKey, StateRecord, LeaseDescriptor, errors, wire constants
//! └── codecs/          # state_key, state_record, lease_uri, candidate_id,
//!                      # plus address/digest/xfl helpers
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codecs;
pub mod domain;

// Re-exports
pub use codecs::address::{decode_account_id, encode_account_id};
pub use codecs::candidate_id::{
    candidate_type, dud_host_candidate_id, new_hook_candidate_id, piloted_mode_candidate_id,
};
pub use codecs::digest::{sha512_half, sha512_half_many};
pub use codecs::lease_uri::{decode_encoded, decode_raw};
pub use codecs::state_key::{
    address_key, candidate_id_key, candidate_owner_key, content_key, derive_storage_index,
    host_address_key, token_id_key, transferee_addr_key,
};
pub use codecs::state_record::{decode, decode_key_only};
pub use codecs::xfl::{from_parts, to_decimal_string};
pub use domain::{
    AccountId, AddressError, CandidateIdRecord, CandidateOwnerRecord, CandidateStatus,
    CandidateType, CodecError, DecodedKey, GovernanceConfigurationRecord, GovernanceInfoRecord,
    GovernanceMode, Hash, HostAddressRecord, KeyKind, LeaseDescriptor, MomentBaseInfoRecord,
    MomentTransitInfoRecord, MomentType, RewardConfigurationRecord, RewardInfoRecord, StateKey,
    StateRecord, TokenIdRecord, TransfereeAddrRecord, HOOK_NAMESPACE, KEY_PREFIX,
    LEASE_URI_PREFIX, STATE_ENTRY_TYPE_TAG,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
