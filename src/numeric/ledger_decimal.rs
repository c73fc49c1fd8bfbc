// ============================================================================
// Ledger Decimal
// Bounded, non-negative 256-bit decimal for token ledger balances
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::float::BigFloat;
use num_bigint::Sign;
use num_traits::ToPrimitive;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Significand width, in bits, of every ledger decimal and every intermediate.
pub const WORKING_PRECISION: u32 = 256;

/// Integer part of a ledger amount must fit in this many bits.
pub const INTEGER_BITS: u32 = 42;

/// Fractional digits rendered by `Display` when no precision is requested.
pub const DISPLAY_DIGITS: usize = 64;

/// Ledger amount held as a 256-bit binary float.
///
/// A value produced by a validated constructor (`from_*`, `FromStr`,
/// `TryFrom`, [`decode`](crate::numeric::codec::decode)) is non-negative with
/// an integer part below 2^42. Arithmetic may leave that domain, e.g. a
/// subtraction going negative; such intermediates must pass
/// [`validate`](Self::validate) again before being encoded or stored.
///
/// Every operation returns a new value and leaves its operands untouched.
///
/// # Example
/// ```
/// use ledger_decimal::numeric::LedgerDecimal;
///
/// let balance: LedgerDecimal = "1250.5".parse()?;
/// let fee = LedgerDecimal::from_u64(2)?;
/// let remaining = &balance - &fee;
/// assert_eq!(remaining.to_string(), "1248.5");
/// # Ok::<(), ledger_decimal::numeric::NumericError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerDecimal(BigFloat);

impl LedgerDecimal {
    // ========================================================================
    // Unchecked Construction
    // ========================================================================

    /// Zero value
    pub fn zero() -> Self {
        Self(BigFloat::zero())
    }

    /// One (1.0)
    pub fn one() -> Self {
        Self(BigFloat::from_u64(1, WORKING_PRECISION))
    }

    /// Create from an `f64` literal without domain checks.
    ///
    /// Intended for constants known to be valid at the call site. Untrusted
    /// input goes through [`from_f64`](Self::from_f64) or `FromStr`.
    ///
    /// # Panics
    /// Panics if `value` is NaN or infinite.
    pub fn new(value: f64) -> Self {
        match BigFloat::from_f64(value, WORKING_PRECISION) {
            Some(float) => Self(float),
            None => panic!("LedgerDecimal::new called with non-finite value {value}"),
        }
    }

    pub(crate) fn from_float(float: BigFloat) -> Self {
        Self(float)
    }

    pub(crate) fn as_float(&self) -> &BigFloat {
        &self.0
    }

    // ========================================================================
    // Validated Construction
    // ========================================================================

    /// Create from an `f64`.
    ///
    /// # Errors
    /// `InvalidInput` for NaN or infinities, `Negative` below zero,
    /// `OutOfRange` when the integer part needs more than 42 bits.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        BigFloat::from_f64(value, WORKING_PRECISION)
            .ok_or(NumericError::InvalidInput)
            .and_then(Self::admit)
    }

    /// Create from an `i32`.
    pub fn from_i32(value: i32) -> NumericResult<Self> {
        Self::admit(BigFloat::from_i64(i64::from(value), WORKING_PRECISION))
    }

    /// Create from an `i64`.
    ///
    /// # Errors
    /// `Negative` below zero, `OutOfRange` at or above 2^42.
    pub fn from_i64(value: i64) -> NumericResult<Self> {
        Self::admit(BigFloat::from_i64(value, WORKING_PRECISION))
    }

    /// Create from a `u64`.
    ///
    /// # Errors
    /// `OutOfRange` at or above 2^42.
    pub fn from_u64(value: u64) -> NumericResult<Self> {
        Self::admit(BigFloat::from_u64(value, WORKING_PRECISION))
    }

    /// Check the ledger domain: non-negative, integer part below 2^42.
    pub fn validate(&self) -> NumericResult<()> {
        if self.0.signum() < 0 {
            return Err(NumericError::Negative);
        }
        if self.0.mant_exp() > i64::from(INTEGER_BITS) {
            return Err(NumericError::OutOfRange);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn admit(float: BigFloat) -> NumericResult<Self> {
        let candidate = Self(float);
        match candidate.validate() {
            Ok(()) => Ok(candidate),
            Err(err) => {
                tracing::debug!(%err, value = %candidate, "rejected ledger decimal");
                Err(err)
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is negative.
    pub fn is_negative(&self) -> bool {
        self.0.signum() < 0
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        self.0.signum()
    }

    /// Binary exponent `e` with `self = m × 2^e`, `0.5 <= |m| < 1` (0 for zero).
    pub fn mant_exp(&self) -> i64 {
        self.0.mant_exp()
    }

    /// Integer part truncated toward zero, saturating at the `i32` bounds.
    pub fn to_i32(&self) -> i32 {
        let truncated = self.to_i64();
        truncated.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Integer part truncated toward zero, saturating at the `i64` bounds.
    pub fn to_i64(&self) -> i64 {
        let truncated = self.0.trunc();
        truncated.to_i64().unwrap_or(match truncated.sign() {
            Sign::Minus => i64::MIN,
            _ => i64::MAX,
        })
    }

    /// Integer part truncated toward zero; negative values give 0 and values
    /// above `u64::MAX` saturate.
    pub fn to_u64(&self) -> u64 {
        let truncated = self.0.trunc();
        match truncated.sign() {
            Sign::Minus => 0,
            _ => truncated.to_u64().unwrap_or(u64::MAX),
        }
    }

    /// Exact decimal expansion (finite for every binary float).
    pub fn to_exact_string(&self) -> String {
        self.0.to_exact_string()
    }

    /// Nearest `f64`, for display and diagnostics only.
    pub fn to_f64_lossy(&self) -> f64 {
        self.0.to_f64_lossy()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.0
            .quo(&rhs.0, WORKING_PRECISION)
            .map(Self)
            .ok_or(NumericError::DivisionByZero)
    }

    /// Remainder of truncating division: `self - rhs × trunc(self / rhs)`.
    ///
    /// The result takes the sign of `self`, so `-7 mod 3 = -1`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        let quotient = self.checked_div(rhs)?;
        let whole = Self(BigFloat::from_bigint(&quotient.0.trunc(), WORKING_PRECISION));
        Ok(self - &(rhs * &whole))
    }

    /// `self^exponent` by repeated multiplication.
    ///
    /// `pow(0)` is one and `pow(1)` is `self`; otherwise `exponent - 1`
    /// sequential products are rounded one at a time.
    pub fn pow(&self, exponent: u64) -> Self {
        if exponent == 0 {
            return Self::one();
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = &result * self;
        }
        result
    }

    /// Returns the minimum of two values.
    pub fn min(self, other: Self) -> Self {
        std::cmp::min(self, other)
    }

    /// Returns the maximum of two values.
    pub fn max(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait<&LedgerDecimal> for &LedgerDecimal {
            type Output = LedgerDecimal;

            #[inline]
            fn $method(self, rhs: &LedgerDecimal) -> LedgerDecimal {
                LedgerDecimal(self.0.$method(&rhs.0, WORKING_PRECISION))
            }
        }

        impl $trait<LedgerDecimal> for &LedgerDecimal {
            type Output = LedgerDecimal;

            #[inline]
            fn $method(self, rhs: LedgerDecimal) -> LedgerDecimal {
                self.$method(&rhs)
            }
        }

        impl $trait<&LedgerDecimal> for LedgerDecimal {
            type Output = LedgerDecimal;

            #[inline]
            fn $method(self, rhs: &LedgerDecimal) -> LedgerDecimal {
                (&self).$method(rhs)
            }
        }

        impl $trait<LedgerDecimal> for LedgerDecimal {
            type Output = LedgerDecimal;

            #[inline]
            fn $method(self, rhs: LedgerDecimal) -> LedgerDecimal {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl Neg for &LedgerDecimal {
    type Output = LedgerDecimal;

    #[inline]
    fn neg(self) -> LedgerDecimal {
        LedgerDecimal(self.0.neg())
    }
}

impl Neg for LedgerDecimal {
    type Output = LedgerDecimal;

    #[inline]
    fn neg(self) -> LedgerDecimal {
        -&self
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for LedgerDecimal {
    type Err = NumericError;

    /// Parse a decimal literal such as `"123"`, `"123.456"` or `"1.5e3"`.
    ///
    /// Malformed input is `InvalidInput`; a leading `-` parses but the
    /// value is then rejected as `Negative`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigFloat::parse(s, WORKING_PRECISION)
            .ok_or(NumericError::InvalidInput)
            .and_then(Self::admit)
    }
}

impl TryFrom<&str> for LedgerDecimal {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i32> for LedgerDecimal {
    type Error = NumericError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value)
    }
}

impl TryFrom<i64> for LedgerDecimal {
    type Error = NumericError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl TryFrom<u64> for LedgerDecimal {
    type Error = NumericError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value)
    }
}

impl TryFrom<f64> for LedgerDecimal {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl LedgerDecimal {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Intended for API boundaries. Every `Decimal` is parsed at full
    /// working precision and then validated like any other input.
    ///
    /// # Errors
    /// `Negative` or `OutOfRange` when the value is outside the ledger domain.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        d.to_string().parse()
    }

    /// Convert to rust_decimal::Decimal, rounded to the 28 significant
    /// digits a `Decimal` can carry.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the integer part does not fit in a `Decimal`.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let integer_digits = self.0.trunc().magnitude().to_string().len();
        if integer_digits > 28 {
            return Err(NumericError::OutOfRange);
        }

        let text = self.0.to_decimal_string(28 - integer_digits);
        rust_decimal::Decimal::from_str(&text).map_err(|_| NumericError::OutOfRange)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for LedgerDecimal {
    /// Honours `{:.N}` (exactly `N` fractional digits); otherwise renders
    /// `DISPLAY_DIGITS` digits with trailing zeros removed. Both round half up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => f.write_str(&self.0.to_decimal_string(digits)),
            None => {
                let text = self.0.to_decimal_string(DISPLAY_DIGITS);
                f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
            }
        }
    }
}

impl fmt::Debug for LedgerDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerDecimal({}, exp={})", self, self.0.mant_exp())
    }
}

// ============================================================================
// Serde (exact decimal string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for LedgerDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_exact_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LedgerDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn dec(s: &str) -> LedgerDecimal {
        s.parse().unwrap()
    }

    /// Unvalidated value, for intermediates outside the ledger domain
    fn raw(s: &str) -> LedgerDecimal {
        LedgerDecimal::from_float(BigFloat::parse(s, WORKING_PRECISION).unwrap())
    }

    #[test]
    fn test_from_str_bounds() {
        assert_eq!(
            "4398046511104".parse::<LedgerDecimal>(),
            Err(NumericError::OutOfRange)
        );
        assert!("4398046511103".parse::<LedgerDecimal>().is_ok());
        assert!("4398046511103.999999".parse::<LedgerDecimal>().is_ok());
        assert_eq!("-1".parse::<LedgerDecimal>(), Err(NumericError::Negative));
        assert_eq!("-0.5".parse::<LedgerDecimal>(), Err(NumericError::Negative));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "not_a_number".parse::<LedgerDecimal>(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!("".parse::<LedgerDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".parse::<LedgerDecimal>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_str_forms() {
        assert_eq!(dec("+12.5"), dec("12.5"));
        assert_eq!(dec("-0"), LedgerDecimal::zero());
        assert_eq!(dec("1.25e2"), dec("125"));
        assert_eq!(LedgerDecimal::try_from("7").unwrap(), dec("7"));
    }

    #[test]
    fn test_integer_constructors() {
        assert_eq!(LedgerDecimal::from_i32(42).unwrap(), dec("42"));
        assert_eq!(LedgerDecimal::from_i32(-1), Err(NumericError::Negative));
        assert_eq!(LedgerDecimal::from_i64(-7), Err(NumericError::Negative));
        assert_eq!(LedgerDecimal::from_i64(i64::MAX), Err(NumericError::OutOfRange));
        assert_eq!(LedgerDecimal::from_u64(1 << 42), Err(NumericError::OutOfRange));
        assert!(LedgerDecimal::from_u64((1 << 42) - 1).is_ok());
        assert_eq!(LedgerDecimal::try_from(0u64).unwrap(), LedgerDecimal::zero());
        assert_eq!(LedgerDecimal::try_from(9i64).unwrap(), dec("9"));
    }

    #[test]
    fn test_float_constructors() {
        assert_eq!(LedgerDecimal::new(2.0), dec("2"));
        assert_eq!(LedgerDecimal::from_f64(0.5).unwrap(), dec("0.5"));
        assert_eq!(LedgerDecimal::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(LedgerDecimal::from_f64(-3.0), Err(NumericError::Negative));
        assert_eq!(LedgerDecimal::from_f64(1e13), Err(NumericError::OutOfRange));
        assert!(LedgerDecimal::try_from(f64::INFINITY).is_err());
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn test_new_rejects_nan() {
        let _ = LedgerDecimal::new(f64::NAN);
    }

    #[test]
    fn test_validate_intermediates() {
        let negative = &dec("1") - &dec("3");
        assert_eq!(negative.validate(), Err(NumericError::Negative));
        assert!(!negative.is_valid());

        let max = LedgerDecimal::from_u64((1 << 42) - 1).unwrap();
        let over = &max + &LedgerDecimal::one();
        assert_eq!(over.validate(), Err(NumericError::OutOfRange));
    }

    #[test]
    fn test_extractors_truncate() {
        assert_eq!(dec("7.99").to_i64(), 7);
        assert_eq!(dec("7.99").to_u64(), 7);
        assert_eq!(dec("7.99").to_i32(), 7);
        assert_eq!(raw("-7.99").to_i64(), -7);
        assert_eq!(raw("-7.99").to_i32(), -7);
        assert_eq!(dec("0.999").to_i64(), 0);
    }

    #[test]
    fn test_extractors_saturate() {
        assert_eq!(raw("-7.99").to_u64(), 0);
        assert_eq!(raw("1e30").to_i64(), i64::MAX);
        assert_eq!(raw("-1e30").to_i64(), i64::MIN);
        assert_eq!(raw("1e30").to_u64(), u64::MAX);
        assert_eq!(raw("1e12").to_i32(), i32::MAX);
        assert_eq!(raw("-1e12").to_i32(), i32::MIN);
    }

    #[test]
    fn test_arithmetic() {
        let a = dec("100.25");
        let b = dec("50.5");
        assert_eq!(&a + &b, dec("150.75"));
        assert_eq!(&a - &b, dec("49.75"));
        assert_eq!(&b - &a, raw("-49.75"));
        assert_eq!(&a * &dec("4"), dec("401"));
        assert_eq!(a.checked_div(&dec("0.25")).unwrap(), dec("401"));
        assert_eq!(a.clone() + b.clone(), dec("150.75"));
    }

    #[test]
    fn test_operands_not_mutated() {
        let a = dec("12.345");
        let b = dec("0.655");
        let (a_before, b_before) = (a.clone(), b.clone());

        let _sum = &a + &b;
        let _difference = &a - &b;
        let _product = &a * &b;
        let _quotient = a.checked_div(&b).unwrap();
        let _remainder = a.checked_rem(&b).unwrap();
        let _negated = -&a;
        let _power = a.pow(3);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_division_by_zero() {
        let zero = LedgerDecimal::zero();
        assert_eq!(dec("1").checked_div(&zero), Err(NumericError::DivisionByZero));
        assert_eq!(dec("1").checked_rem(&zero), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_truncating_rem() {
        let minus_seven = raw("-7");
        let three = LedgerDecimal::from_i64(3).unwrap();
        assert_eq!(minus_seven.checked_rem(&three).unwrap(), raw("-1"));

        assert_eq!(dec("7").checked_rem(&raw("-3")).unwrap(), dec("1"));
        assert_eq!(dec("7").checked_rem(&dec("3")).unwrap(), dec("1"));
        assert_eq!(dec("7.5").checked_rem(&dec("2")).unwrap(), dec("1.5"));
        assert_eq!(dec("6").checked_rem(&dec("3")).unwrap(), LedgerDecimal::zero());
    }

    #[test]
    fn test_pow() {
        let three = dec("3");
        assert_eq!(three.pow(0), LedgerDecimal::one());
        assert_eq!(three.pow(1), three);
        assert_eq!(three.pow(4), dec("81"));
        assert_eq!(dec("0.5").pow(3), dec("0.125"));
        assert_eq!(raw("-2").pow(3), raw("-8"));
        assert_eq!(LedgerDecimal::zero().pow(0), LedgerDecimal::one());
    }

    #[test]
    fn test_sign_abs_neg() {
        let x = dec("2.5");
        let neg_x = -&x;
        assert_eq!(neg_x.signum(), -1);
        assert!(neg_x.is_negative());
        assert_eq!(neg_x.abs(), x);
        assert_eq!(-neg_x, x);
        assert_eq!(LedgerDecimal::zero().signum(), 0);
        assert_eq!(-LedgerDecimal::zero(), LedgerDecimal::zero());
        assert!(LedgerDecimal::zero().is_zero());
    }

    #[test]
    fn test_comparison() {
        let a = dec("100");
        let b = dec("50.000001");

        assert!(a > b);
        assert!(b < a);
        assert!(raw("-1") < LedgerDecimal::zero());
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_ne!(a, b);
        assert_eq!(a.clone().min(b.clone()), b);
        assert_eq!(a.clone().max(b), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("123.456").to_string(), "123.456");
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(raw("-0.1").to_string(), "-0.1");
        assert_eq!(format!("{:.2}", dec("123.456")), "123.46");
        assert_eq!(format!("{:.0}", dec("2.5")), "3");

        let third = LedgerDecimal::one().checked_div(&dec("3")).unwrap();
        assert_eq!(format!("{:.5}", third), "0.33333");
        assert_eq!(third.to_string(), format!("0.{}", "3".repeat(DISPLAY_DIGITS)));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", dec("3")), "LedgerDecimal(3, exp=2)");
    }

    #[test]
    fn test_exact_string() {
        assert_eq!(dec("0.375").to_exact_string(), "0.375");
        assert_eq!(dec("1024").to_exact_string(), "1024");
        assert_eq!(LedgerDecimal::new(0.1).to_exact_string().len(), 57);
    }

    #[test]
    fn test_exact_string_roundtrip_for_tiny_amounts() {
        // 2^-20000 expands to 20000 fractional digits
        let tiny = LedgerDecimal::one()
            .checked_div(&LedgerDecimal::new(2.0).pow(20_000))
            .unwrap();
        let text = tiny.to_exact_string();
        assert!(text.len() > 20_000);
        assert_eq!(text.parse::<LedgerDecimal>().unwrap(), tiny);

        let amount: LedgerDecimal = format!("12.5{}1", "0".repeat(12_000)).parse().unwrap();
        assert!(amount > dec("12.5"));
        assert_eq!(format!("{:.10}", amount), "12.5000000000");
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        assert_eq!(LedgerDecimal::from_decimal(d).unwrap(), dec("123.45"));
        assert_eq!(
            LedgerDecimal::from_decimal(Decimal::new(-1, 0)),
            Err(NumericError::Negative)
        );
        assert_eq!(
            LedgerDecimal::from_decimal(Decimal::new(5_000_000_000_000, 0)),
            Err(NumericError::OutOfRange)
        );
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        assert_eq!(dec("123.45").to_decimal().unwrap(), Decimal::new(12345, 2));
        assert_eq!(raw("-2.5").to_decimal().unwrap(), Decimal::new(-25, 1));
        assert_eq!(raw("1e40").to_decimal(), Err(NumericError::OutOfRange));
    }

    quickcheck! {
        fn prop_u64_roundtrip(n: u64) -> bool {
            let n = n % (1 << INTEGER_BITS);
            LedgerDecimal::from_u64(n).map(|d| d.to_u64() == n).unwrap_or(false)
        }

        fn prop_i64_sign_rule(n: i64) -> bool {
            match LedgerDecimal::from_i64(n) {
                Ok(d) => n >= 0 && d.to_i64() == n,
                Err(NumericError::Negative) => n < 0,
                Err(NumericError::OutOfRange) => n >= 1 << INTEGER_BITS,
                Err(_) => false,
            }
        }

        fn prop_neg_involution(n: i64, scale: u8) -> bool {
            let x = LedgerDecimal::from_float(BigFloat::from_i64(n, WORKING_PRECISION));
            let divisor = LedgerDecimal::from_u64(u64::from(scale) + 1).unwrap_or_default();
            let x = x.checked_div(&divisor).unwrap_or_default();
            -(-&x) == x && (-&x).abs() == x.abs()
        }
    }
}
