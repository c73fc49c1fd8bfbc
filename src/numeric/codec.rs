// ============================================================================
// Binary Codec
// Fixed-point 32-byte representation: 42 integer bits, 214 fractional bits
// ============================================================================
//
// Wire format: the value × 2^214, truncated toward zero, as a big-endian
// unsigned integer left-padded to exactly 32 bytes. No header, sign or
// length prefix.

use super::errors::{NumericError, NumericResult};
use super::float::BigFloat;
use super::ledger_decimal::{LedgerDecimal, INTEGER_BITS, WORKING_PRECISION};
use num_bigint::BigUint;

/// Encoded size in bytes
pub const ENCODED_LEN: usize = 32;

/// Binary digits kept after the point
pub const FRACTIONAL_BITS: u32 = 214;

const _: () = assert!(INTEGER_BITS + FRACTIONAL_BITS == 8 * ENCODED_LEN as u32);

/// Encode a ledger amount.
///
/// Fractional bits beyond the 214th are truncated, not rounded.
///
/// # Errors
/// `Negative` below zero, `OutOfRange` when the integer part needs more
/// than 42 bits.
pub fn encode(value: &LedgerDecimal) -> NumericResult<[u8; ENCODED_LEN]> {
    if let Err(err) = value.validate() {
        tracing::debug!(%err, value = %value, "refusing to encode");
        return Err(err);
    }

    let scaled = value.as_float().scaled_trunc(i64::from(FRACTIONAL_BITS));
    let digits = scaled.to_bytes_be();
    if digits.len() > ENCODED_LEN {
        return Err(NumericError::OutOfRange);
    }

    let mut out = [0u8; ENCODED_LEN];
    out[ENCODED_LEN - digits.len()..].copy_from_slice(&digits);
    Ok(out)
}

/// Decode 32 bytes. Every bit pattern is a valid ledger amount.
pub fn decode(bytes: &[u8; ENCODED_LEN]) -> LedgerDecimal {
    let scaled = BigUint::from_bytes_be(bytes);
    LedgerDecimal::from_float(BigFloat::from_mant_exp(
        scaled,
        -i64::from(FRACTIONAL_BITS),
        WORKING_PRECISION,
    ))
}

/// Decode from a slice that must hold exactly [`ENCODED_LEN`] bytes.
///
/// # Errors
/// Returns `InvalidInput` on any other length.
pub fn decode_slice(bytes: &[u8]) -> NumericResult<LedgerDecimal> {
    let bytes: &[u8; ENCODED_LEN] = bytes.try_into().map_err(|_| NumericError::InvalidInput)?;
    Ok(decode(bytes))
}

impl LedgerDecimal {
    /// See [`encode`]
    pub fn to_bytes(&self) -> NumericResult<[u8; ENCODED_LEN]> {
        encode(self)
    }

    /// See [`decode`]
    pub fn from_bytes(bytes: &[u8; ENCODED_LEN]) -> Self {
        decode(bytes)
    }
}
