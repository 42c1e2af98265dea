//! # State Key Codec
//!
//! Builds the canonical 32-byte hook-state keys and derives the salted
//! storage index the host ledger files those keys under.
//!
//! Two key shapes exist beside the well-known singleton/configuration
//! constants:
//!
//! - address keys: `"HVE" ‖ tag ‖ 8 zero bytes ‖ account id (20)`
//! - content keys: `"HVE" ‖ tag ‖ content[4..32]` (last 28 id bytes)
//!
//! The storage index is the SHA-512 half of
//! `entry type tag (2, BE) ‖ owner (20) ‖ key (32) ‖ namespace (32)`.
//! Field order and byte width are wire facts shared with the ledger; a
//! different order derives a different (wrong) index.

use crate::codecs::{address, digest};
use crate::domain::{
    AccountId, CodecError, KeyKind, StateKey, ADDRESS_KEY_ACCOUNT_OFFSET, KEY_PREFIX,
    STATE_ENTRY_TYPE_TAG,
};

/// Build an address-shaped key for one of the address-keyed kinds.
pub fn address_key(kind: KeyKind, account_id: &AccountId) -> Result<StateKey, CodecError> {
    if !kind.is_address_keyed() {
        return Err(CodecError::InvalidKeyKind {
            kind,
            expected: "an address-keyed kind",
        });
    }
    let mut key = [0u8; 32];
    key[0..3].copy_from_slice(&KEY_PREFIX);
    key[3] = kind.tag();
    key[ADDRESS_KEY_ACCOUNT_OFFSET..32].copy_from_slice(account_id);
    Ok(StateKey(key))
}

/// Build a content-shaped key for one of the content-keyed kinds.
pub fn content_key(kind: KeyKind, content: &[u8; 32]) -> Result<StateKey, CodecError> {
    if !kind.is_content_keyed() {
        return Err(CodecError::InvalidKeyKind {
            kind,
            expected: "a content-keyed kind",
        });
    }
    let mut key = [0u8; 32];
    key[0..3].copy_from_slice(&KEY_PREFIX);
    key[3] = kind.tag();
    key[4..32].copy_from_slice(&content[4..32]);
    Ok(StateKey(key))
}

/// Key of a host registration entry, from the host's textual address.
pub fn host_address_key(address: &str) -> Result<StateKey, CodecError> {
    let account_id = address::decode_account_id(address)?;
    address_key(KeyKind::HostAddress, &account_id)
}

/// Key of a pending-transfer entry, from the transferee's textual address.
pub fn transferee_addr_key(address: &str) -> Result<StateKey, CodecError> {
    let account_id = address::decode_account_id(address)?;
    address_key(KeyKind::TransfereeAddr, &account_id)
}

/// Key of a proposed hook slate, from the owner's textual address.
pub fn candidate_owner_key(address: &str) -> Result<StateKey, CodecError> {
    let account_id = address::decode_account_id(address)?;
    address_key(KeyKind::CandidateOwner, &account_id)
}

/// Key of a hardware profile entry, from the 32-byte URI token id.
pub fn token_id_key(token_id: &[u8; 32]) -> StateKey {
    let mut key = [0u8; 32];
    key[0..3].copy_from_slice(&KEY_PREFIX);
    key[3] = KeyKind::TokenId.tag();
    key[4..32].copy_from_slice(&token_id[4..32]);
    StateKey(key)
}

/// Key of a governance candidate entry, from the 32-byte candidate id.
pub fn candidate_id_key(candidate_id: &[u8; 32]) -> StateKey {
    let mut key = [0u8; 32];
    key[0..3].copy_from_slice(&KEY_PREFIX);
    key[3] = KeyKind::CandidateId.tag();
    key[4..32].copy_from_slice(&candidate_id[4..32]);
    StateKey(key)
}

/// Derive the ledger storage index a key is filed under, as 64 uppercase
/// hex characters.
pub fn derive_storage_index(owner: &AccountId, key: &StateKey, namespace: &[u8; 32]) -> String {
    let half = digest::sha512_half_many(&[
        &STATE_ENTRY_TYPE_TAG.to_be_bytes(),
        owner,
        key.as_bytes(),
        namespace,
    ]);
    hex::encode_upper(half)
}
