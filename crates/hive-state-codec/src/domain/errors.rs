//! # Domain Errors
//!
//! Error types for the hook-state codec layer.
//!
//! Decoding is all-or-nothing: any error below means no record was produced.
//! Unrecognized keys fail closed; there is no default record variant.

use thiserror::Error;

/// Errors raised while decoding the ledger's account address form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The address is not valid base58, or its checksum does not verify.
    #[error("Invalid account address encoding: {0}")]
    Encoding(String),

    /// The decoded payload has the wrong version byte or length.
    #[error("Account address payload malformed: expected version 0x00 + 20 bytes, got {got} bytes")]
    Payload {
        /// Actual payload length in bytes.
        got: usize,
    },
}

/// Errors raised by key derivation and record decoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The state key matches no known prefix and no well-known key.
    #[error("Unrecognized state key: {0}")]
    UnknownKey(String),

    /// The state buffer is shorter than the kind's mandatory minimum.
    #[error("State buffer too short for {kind}: {got} < {min} bytes")]
    BufferTooShort {
        /// Record kind being decoded.
        kind: &'static str,
        /// Bytes available.
        got: usize,
        /// Mandatory minimum for this kind.
        min: usize,
    },

    /// A scaled-decimal field could not be converted to a decimal string.
    #[error("Scaled-decimal conversion failed: {0}")]
    Decode(String),

    /// A URI input was not valid hex, or its inner base64 text did not decode.
    #[error("Invalid URI encoding: {0}")]
    UriEncoding(String),

    /// A key-builder was handed a kind it cannot produce.
    #[error("Key kind {kind:?} is not {expected}")]
    InvalidKeyKind {
        /// The kind that was passed.
        kind: crate::domain::KeyKind,
        /// What the builder expected.
        expected: &'static str,
    },

    /// The account address collaborator rejected its input.
    #[error(transparent)]
    Address(#[from] AddressError),
}
