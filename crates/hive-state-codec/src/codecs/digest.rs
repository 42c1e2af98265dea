//! # SHA-512 Half Digests
//!
//! The host ledger identifies objects by the first half of a SHA-512
//! digest. Both the hook-state storage index and new-hook candidate ids
//! are built from these 32-byte truncations.

use crate::domain::Hash;
use sha2::{Digest, Sha512};

/// First 32 bytes of SHA-512 over `data` (one-shot).
pub fn sha512_half(data: &[u8]) -> Hash {
    let digest = Sha512::digest(data);
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

/// First 32 bytes of SHA-512 over several inputs fed in order.
pub fn sha512_half_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha512::new();
    for input in inputs {
        hasher.update(input);
    }
    let digest = hasher.finalize();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}
