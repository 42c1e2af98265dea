//! # Account Address Codec
//!
//! Converts between 20-byte account ids and the ledger's textual address
//! form: version byte `0x00`, then the id, Base58Check-encoded (double
//! SHA-256 checksum) in the ledger's own base58 alphabet.
//!
//! This is the only module that touches address text. Record decoders and
//! key builders go through these two functions, so malformed input always
//! surfaces as an [`AddressError`].

use crate::domain::{AccountId, AddressError};
use bs58::Alphabet;

/// Version byte prefixed to an account id before checksumming.
const ACCOUNT_ID_VERSION: u8 = 0x00;

/// Encode a raw account id into its checksummed textual address.
pub fn encode_account_id(account_id: &AccountId) -> String {
    let mut payload = [0u8; 21];
    payload[0] = ACCOUNT_ID_VERSION;
    payload[1..21].copy_from_slice(account_id);
    bs58::encode(payload)
        .with_alphabet(Alphabet::RIPPLE)
        .with_check()
        .into_string()
}

/// Decode a textual address back into the raw 20-byte account id.
///
/// Rejects bad characters, bad checksums, wrong version bytes, and
/// payloads that are not exactly 20 bytes.
pub fn decode_account_id(address: &str) -> Result<AccountId, AddressError> {
    let bytes = bs58::decode(address)
        .with_alphabet(Alphabet::RIPPLE)
        .with_check(Some(ACCOUNT_ID_VERSION))
        .into_vec()
        .map_err(|err| AddressError::Encoding(err.to_string()))?;

    // The version byte survives the checksum strip.
    if bytes.len() != 21 {
        return Err(AddressError::Payload {
            got: bytes.len().saturating_sub(1),
        });
    }

    let mut account_id = [0u8; 20];
    account_id.copy_from_slice(&bytes[1..21]);
    Ok(account_id)
}
