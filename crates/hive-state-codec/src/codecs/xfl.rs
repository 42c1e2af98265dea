//! # Scaled-Decimal Codec
//!
//! Monetary fields on the wire are 64-bit enclosing decimal floats:
//!
//! ```text
//! bit 63      enclosing sign, always 0 on a valid value
//! bit 62      number sign flag: set = positive, clear = negative
//! bits 54-61  exponent, biased by 97
//! bits 0-53   mantissa, normalized to [10^15, 10^16)
//! ```
//!
//! Rendering goes through integer and string arithmetic only. Binary
//! floating point would round sixteen-digit mantissas; the decimal string
//! is the value of record.

use crate::domain::CodecError;

/// Mask selecting the 54 mantissa bits.
const MANTISSA_MASK: u64 = (1 << 54) - 1;
/// Smallest normalized mantissa, 10^15.
const MANTISSA_MIN: u64 = 1_000_000_000_000_000;
/// Largest normalized mantissa, 10^16 - 1.
const MANTISSA_MAX: u64 = 9_999_999_999_999_999;
/// Exponent bias applied on the wire.
const EXPONENT_BIAS: i32 = 97;
/// Smallest representable exponent.
const EXPONENT_MIN: i32 = -96;
/// Largest representable exponent.
const EXPONENT_MAX: i32 = 80;

/// Render an enclosing value as a base-10 decimal string.
///
/// Zero renders as `"0"`. A set bit 63 is invalid and fails with
/// [`CodecError::Decode`]; every other bit pattern renders.
pub fn to_decimal_string(value: i64) -> Result<String, CodecError> {
    if value == 0 {
        return Ok("0".to_string());
    }
    if value < 0 {
        return Err(CodecError::Decode(
            "scaled-decimal enclosing value has bit 63 set".to_string(),
        ));
    }

    let bits = value as u64;
    let negative = bits & (1 << 62) == 0;
    let exponent = ((bits >> 54) & 0xFF) as i32 - EXPONENT_BIAS;
    let mantissa = bits & MANTISSA_MASK;
    if mantissa == 0 {
        return Ok("0".to_string());
    }

    let digits = mantissa.to_string();
    let unsigned = if exponent >= 0 {
        format!("{digits}{}", "0".repeat(exponent as usize))
    } else {
        let point = digits.len() as i32 + exponent;
        if point <= 0 {
            // Entire mantissa sits behind the decimal point.
            let padded = format!("{}{digits}", "0".repeat((-point) as usize));
            format!("0.{}", padded.trim_end_matches('0'))
        } else {
            let (int_part, frac_part) = digits.split_at(point as usize);
            let frac = frac_part.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}.{frac}")
            }
        }
    };

    Ok(if negative {
        format!("-{unsigned}")
    } else {
        unsigned
    })
}

/// Assemble an enclosing value from its parts. Inverse of
/// [`to_decimal_string`], used by encoders and test fixtures.
///
/// A zero mantissa yields the canonical zero regardless of the other
/// parts. Otherwise the mantissa must be normalized and the exponent in
/// range.
pub fn from_parts(negative: bool, mantissa: u64, exponent: i32) -> Result<i64, CodecError> {
    if mantissa == 0 {
        return Ok(0);
    }
    if !(MANTISSA_MIN..=MANTISSA_MAX).contains(&mantissa) {
        return Err(CodecError::Decode(format!(
            "scaled-decimal mantissa {mantissa} outside [10^15, 10^16)"
        )));
    }
    if !(EXPONENT_MIN..=EXPONENT_MAX).contains(&exponent) {
        return Err(CodecError::Decode(format!(
            "scaled-decimal exponent {exponent} outside [{EXPONENT_MIN}, {EXPONENT_MAX}]"
        )));
    }

    let mut bits = mantissa;
    bits |= (((exponent + EXPONENT_BIAS) as u64) & 0xFF) << 54;
    if !negative {
        bits |= 1 << 62;
    }
    Ok(bits as i64)
}
