// ============================================================================
// Ledger Decimal Library
// Bounded high-precision amounts for token ledgers
// ============================================================================

//! # Ledger Decimal
//!
//! A bounded, non-negative, 256-bit decimal type for token ledger balances.
//!
//! ## Features
//!
//! - **Validated ingestion** from strings, machine integers, `f64` and
//!   `rust_decimal::Decimal`: negative values and integer parts of 2^42 or
//!   more are rejected
//! - **Pure arithmetic** at a fixed 256-bit working precision
//! - **Newton-Raphson n-th roots** with a relative convergence margin and a
//!   hard iteration cap
//! - **32-byte fixed-point codec** (42 integer bits, 214 fractional bits),
//!   lossless for every value it can represent
//!
//! ## Example
//!
//! ```rust
//! use ledger_decimal::prelude::*;
//!
//! let balance: LedgerDecimal = "1024.5".parse()?;
//! let stake = LedgerDecimal::from_u64(256)?;
//!
//! // Geometric mean of the two amounts
//! let mean = (&balance * &stake).sqrt()?;
//! assert_eq!(format!("{:.6}", mean), "512.124985");
//!
//! // Persist and restore
//! let bytes = encode(&balance)?;
//! assert_eq!(bytes.len(), 32);
//! assert_eq!(decode(&bytes), balance);
//!
//! // Invalid input is an error, never a value
//! assert_eq!("-1".parse::<LedgerDecimal>(), Err(NumericError::Negative));
//! # Ok::<(), NumericError>(())
//! ```

pub mod config;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{RootConfig, MAX_ITERATIONS, PRECISION_MARGIN};
    pub use crate::numeric::{
        decode, encode, LedgerDecimal, NumericError, NumericResult, ENCODED_LEN,
        FRACTIONAL_BITS, INTEGER_BITS, WORKING_PRECISION,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_balance_update() {
        let balance: LedgerDecimal = "1000000.375".parse().unwrap();
        let deposit = LedgerDecimal::from_u64(250_000).unwrap();
        let withdrawal: LedgerDecimal = "0.375".parse().unwrap();

        let updated = &(&balance + &deposit) - &withdrawal;
        assert!(updated.is_valid());
        assert_eq!(updated.to_string(), "1250000");

        let restored = LedgerDecimal::from_bytes(&updated.to_bytes().unwrap());
        assert_eq!(restored, updated);
        assert_eq!(restored.to_u64(), 1_250_000);
    }

    #[test]
    fn test_overdraft_is_caught_before_encoding() {
        let balance = LedgerDecimal::from_u64(10).unwrap();
        let debit = LedgerDecimal::from_u64(11).unwrap();

        let updated = &balance - &debit;
        assert_eq!(updated.signum(), -1);
        assert_eq!(encode(&updated), Err(NumericError::Negative));
        assert_eq!(updated.to_i64(), -1);
    }

    #[test]
    fn test_compounding_rate_from_root() {
        // Monthly factor whose 12th power is a 10% annual yield
        let annual: LedgerDecimal = "1.1".parse().unwrap();
        let monthly = annual.root(12).unwrap();
        let compounded = monthly.pow(12);

        assert_eq!(format!("{:.40}", compounded), format!("{:.40}", annual));
        assert!(encode(&monthly).is_ok());
    }

    #[test]
    fn test_custom_root_config() {
        let config = RootConfig::default()
            .with_precision_margin(PRECISION_MARGIN)
            .with_max_iterations(MAX_ITERATIONS);
        let value = LedgerDecimal::from_u64(81).unwrap();

        let root = value.root_with(4, &config).unwrap();
        assert_eq!(format!("{:.50}", root), format!("{:.50}", LedgerDecimal::new(3.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_roundtrip() {
        let third = LedgerDecimal::one()
            .checked_div(&LedgerDecimal::from_u64(3).unwrap())
            .unwrap();

        let json = serde_json::to_string(&third).unwrap();
        assert!(json.starts_with("\"0.333"));
        let back: LedgerDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, third);

        let rejected: Result<LedgerDecimal, _> = serde_json::from_str("\"-5\"");
        assert!(rejected.is_err());

        let config: RootConfig =
            serde_json::from_str(r#"{"precision_margin":200,"max_iterations":64}"#).unwrap();
        assert_eq!(config, RootConfig::new(200, 64));
    }
}
