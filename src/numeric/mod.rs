// ============================================================================
// Numeric Module
// 256-bit ledger decimal, its root finding and its binary codec
// ============================================================================
//
// This module provides:
// - BigFloat: binary float primitive with explicit rounding precision
// - LedgerDecimal: validated, non-negative amount with integer part < 2^42
// - Newton-Raphson n-th roots with a bounded iteration count
// - A 32-byte fixed-point codec (42 integer bits, 214 fractional bits)
// - NumericError: error types for all of the above
//
// Design principles:
// - Fixed 256-bit working precision for every intermediate
// - Operations never mutate their operands
// - Fallible operations return Result (no panics on untrusted input)

pub mod codec;
mod errors;
pub mod float;
mod ledger_decimal;
mod root;

pub use codec::{decode, encode, ENCODED_LEN, FRACTIONAL_BITS};
pub use errors::{NumericError, NumericResult};
pub use float::BigFloat;
pub use ledger_decimal::{LedgerDecimal, DISPLAY_DIGITS, INTEGER_BITS, WORKING_PRECISION};
