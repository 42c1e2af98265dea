//! # Candidate Identity
//!
//! Deterministic 32-byte ids for the three governance proposal types.
//! Bytes 0..4 are always zero and byte 4 carries the [`CandidateType`]
//! discriminant; each constructor writes its content strictly after the
//! discriminant, so the type can be read back from any well-formed id.

use crate::codecs::{address, digest};
use crate::domain::{CandidateType, CodecError, Hash, HOOK_NAMESPACE};

/// Byte carrying the type discriminant.
const TYPE_OFFSET: usize = 4;

/// Id of a new-hook proposal: the SHA-512 half of the proposed 128-byte
/// hook slate, with the leading bytes overwritten by the discriminant.
pub fn new_hook_candidate_id(content: &[u8]) -> Hash {
    let mut id = digest::sha512_half(content);
    id[0..TYPE_OFFSET].fill(0);
    id[TYPE_OFFSET] = CandidateType::NewHook.discriminant();
    id
}

/// Id of the piloted-mode proposal. There is exactly one per network:
/// the content bytes come from the registry hook namespace.
pub fn piloted_mode_candidate_id() -> Hash {
    let mut id = [0u8; 32];
    id[TYPE_OFFSET] = CandidateType::PilotedMode.discriminant();
    id[5..32].copy_from_slice(&HOOK_NAMESPACE[5..32]);
    id
}

/// Id of a dud-host proposal against the given host. Bytes 5..12 stay
/// zero; the account id fills the tail.
pub fn dud_host_candidate_id(host_address: &str) -> Result<Hash, CodecError> {
    let account_id = address::decode_account_id(host_address)?;
    let mut id = [0u8; 32];
    id[TYPE_OFFSET] = CandidateType::DudHost.discriminant();
    id[12..32].copy_from_slice(&account_id);
    Ok(id)
}

/// Read the proposal type back out of a candidate id.
pub fn candidate_type(id: &[u8; 32]) -> Option<CandidateType> {
    CandidateType::from_discriminant(id[TYPE_OFFSET])
}
