// ============================================================================
// Binary Floating Point
// Arbitrary-precision binary float with round-to-nearest-even
// ============================================================================

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Largest decimal magnitude accepted by [`BigFloat::parse`]: the power of ten
/// of the leading significant digit must lie within `±MAX_DECIMAL_EXPONENT`.
///
/// Bounds the size of the power of ten materialised while parsing, so an
/// input like `1e999999999` is rejected instead of allocating gigabytes.
pub const MAX_DECIMAL_EXPONENT: u64 = 10_000;

/// Most significant digits accepted by [`BigFloat::parse`], after leading and
/// trailing zeros are stripped. Enough for the exact expansion of any 256-bit
/// value within the magnitude bound.
pub const MAX_SIGNIFICANT_DIGITS: usize = 25_000;

/// Binary floating-point number `(-1)^neg × mant × 2^exp`.
///
/// Values are kept canonical: zero is `(false, 0, 0)` and every non-zero
/// mantissa is odd. Two values are therefore numerically equal exactly when
/// they are structurally equal.
///
/// Precision is not stored; every operation takes the target precision in
/// bits and rounds its exact result once, to nearest with ties to even.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigFloat {
    neg: bool,
    mant: BigUint,
    exp: i64,
}

impl BigFloat {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero
    pub fn zero() -> Self {
        Self {
            neg: false,
            mant: BigUint::zero(),
            exp: 0,
        }
    }

    /// Exact conversion of a finite `f64`, rounded to `prec` bits.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64, prec: u32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let bits = value.to_bits();
        let neg = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);

        // Subnormals carry no implicit leading bit
        let (mant, exp) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        Some(Self::round(neg, BigUint::from(mant), exp, prec, false))
    }

    pub fn from_i64(value: i64, prec: u32) -> Self {
        Self::round(value < 0, BigUint::from(value.unsigned_abs()), 0, prec, false)
    }

    pub fn from_u64(value: u64, prec: u32) -> Self {
        Self::round(false, BigUint::from(value), 0, prec, false)
    }

    pub fn from_bigint(value: &BigInt, prec: u32) -> Self {
        Self::round(
            value.sign() == Sign::Minus,
            value.magnitude().clone(),
            0,
            prec,
            false,
        )
    }

    /// `mant × 2^exp`, rounded to `prec` bits.
    ///
    /// Exact whenever `mant` has at most `prec` significant bits.
    pub fn from_mant_exp(mant: BigUint, exp: i64, prec: u32) -> Self {
        Self::round(false, mant, exp, prec, false)
    }

    /// Parse a decimal literal, correctly rounded to `prec` bits.
    ///
    /// Accepted grammar: an optional `+` or `-`, then digits with an optional
    /// `.` (at least one digit overall), then an optional `e`/`E` exponent.
    /// Surrounding whitespace is rejected.
    pub fn parse(s: &str, prec: u32) -> Option<Self> {
        let (neg, body) = match s.as_bytes().first() {
            Some(&b'-') => (true, &s[1..]),
            Some(&b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (number, exponent) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        let (int_digits, frac_digits) = number.split_once('.').unwrap_or((number, ""));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let exp10 = match exponent {
            Some(e) => e.parse::<i64>().ok()?,
            None => 0,
        };

        let digits = format!("{int_digits}{frac_digits}");
        let significant = digits.trim_start_matches('0');
        let trimmed = significant.trim_end_matches('0');
        if trimmed.is_empty() {
            return Some(Self::zero());
        }
        if trimmed.len() > MAX_SIGNIFICANT_DIGITS {
            return None;
        }

        // value = trimmed × 10^exp10
        let exp10 = exp10
            .checked_sub(frac_digits.len() as i64)?
            .checked_add((significant.len() - trimmed.len()) as i64)?;
        let magnitude = exp10.checked_add(trimmed.len() as i64 - 1)?;
        if magnitude.unsigned_abs() > MAX_DECIMAL_EXPONENT {
            return None;
        }

        let coefficient = BigUint::parse_bytes(trimmed.as_bytes(), 10)?;
        let ten = BigUint::from(10u32);

        if exp10 >= 0 {
            let scaled = coefficient * ten.pow(exp10 as u32);
            Some(Self::round(neg, scaled, 0, prec, false))
        } else {
            let divisor = ten.pow(exp10.unsigned_abs() as u32);
            Some(Self::from_ratio(neg, &coefficient, &divisor, 0, prec))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_zero(&self) -> bool {
        self.mant.is_zero()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        if self.mant.is_zero() {
            0
        } else if self.neg {
            -1
        } else {
            1
        }
    }

    /// Binary exponent `e` such that `self = m × 2^e` with `0.5 <= |m| < 1`.
    ///
    /// Zero reports 0. A value with `mant_exp() <= k` has an integer part
    /// that fits in `k` bits.
    pub fn mant_exp(&self) -> i64 {
        if self.mant.is_zero() {
            0
        } else {
            self.exp + self.mant.bits() as i64
        }
    }

    /// Number of significant bits in the mantissa.
    pub fn significant_bits(&self) -> u64 {
        self.mant.bits()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn neg(&self) -> Self {
        if self.mant.is_zero() {
            return Self::zero();
        }
        Self {
            neg: !self.neg,
            mant: self.mant.clone(),
            exp: self.exp,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            neg: false,
            mant: self.mant.clone(),
            exp: self.exp,
        }
    }

    pub fn add(&self, other: &Self, prec: u32) -> Self {
        if other.is_zero() {
            return self.rounded(prec);
        }
        if self.is_zero() {
            return other.rounded(prec);
        }

        // Operands far below half an ulp of the other cannot move the result
        let margin = i64::from(prec) + 2;
        if self.mant.bits() <= u64::from(prec) && other.mant_exp() + margin < self.mant_exp() {
            return self.clone();
        }
        if other.mant.bits() <= u64::from(prec) && self.mant_exp() + margin < other.mant_exp() {
            return other.clone();
        }

        let exp = self.exp.min(other.exp);
        let lhs = self.signed() << (self.exp - exp) as usize;
        let rhs = other.signed() << (other.exp - exp) as usize;
        let (sign, mag) = (lhs + rhs).into_parts();

        Self::round(sign == Sign::Minus, mag, exp, prec, false)
    }

    pub fn sub(&self, other: &Self, prec: u32) -> Self {
        self.add(&other.neg(), prec)
    }

    pub fn mul(&self, other: &Self, prec: u32) -> Self {
        Self::round(
            self.neg ^ other.neg,
            &self.mant * &other.mant,
            self.exp + other.exp,
            prec,
            false,
        )
    }

    /// Correctly rounded quotient; `None` when `other` is zero.
    pub fn quo(&self, other: &Self, prec: u32) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self::from_ratio(
            self.neg ^ other.neg,
            &self.mant,
            &other.mant,
            self.exp - other.exp,
            prec,
        ))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        let sign = if self.neg { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, self.shifted_magnitude(0))
    }

    /// `⌊|self| × 2^k⌋`
    pub fn scaled_trunc(&self, k: i64) -> BigUint {
        self.shifted_magnitude(k)
    }

    /// Decimal rendering with exactly `digits` fractional digits, rounding
    /// the dropped tail half up.
    pub fn to_decimal_string(&self, digits: usize) -> String {
        let scaled = &self.mant * BigUint::from(10u32).pow(digits as u32);
        let units = if self.exp >= 0 {
            scaled << self.exp as usize
        } else {
            let shift = self.exp.unsigned_abs() as usize;
            let kept = &scaled >> shift;
            let dropped = scaled - (&kept << shift);
            let half = BigUint::one() << (shift - 1);
            if dropped >= half {
                kept + 1u32
            } else {
                kept
            }
        };

        let mut text = units.to_string();
        if digits > 0 {
            if text.len() <= digits {
                text = format!("{}{}", "0".repeat(digits + 1 - text.len()), text);
            }
            text.insert(text.len() - digits, '.');
        }
        if self.neg && !units.is_zero() {
            text.insert(0, '-');
        }
        text
    }

    /// Exact decimal expansion with trailing zeros removed.
    ///
    /// Always finite: `2^-k` has exactly `k` fractional decimal digits.
    pub fn to_exact_string(&self) -> String {
        let digits = if self.exp < 0 {
            self.exp.unsigned_abs() as usize
        } else {
            0
        };
        let text = self.to_decimal_string(digits);
        if digits == 0 {
            return text;
        }
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    /// Nearest `f64`, for diagnostics only.
    ///
    /// Rounds once to nearest-even, into the subnormal range where needed.
    /// Magnitudes beyond `f64::MAX` become infinite.
    pub fn to_f64_lossy(&self) -> f64 {
        let magnitude = if self.mant.is_zero() {
            0.0
        } else if self.mant_exp() > 1024 {
            f64::INFINITY
        } else if self.mant_exp() > -1022 {
            let rounded = self.rounded(53);
            let shift = 53 - rounded.mant.bits() as i64;
            let fraction = (rounded.mant << shift as usize).to_u64().unwrap_or(0);
            let biased = rounded.exp - shift + 1075;
            if biased >= 2047 {
                f64::INFINITY
            } else {
                f64::from_bits(((biased as u64) << 52) | (fraction & ((1u64 << 52) - 1)))
            }
        } else if self.mant_exp() < -1074 {
            0.0
        } else {
            f64::from_bits(self.subnormal_bits())
        };

        if self.neg {
            -magnitude
        } else {
            magnitude
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn rounded(&self, prec: u32) -> Self {
        if self.mant.bits() <= u64::from(prec) {
            return self.clone();
        }
        Self::round(self.neg, self.mant.clone(), self.exp, prec, false)
    }

    /// |self| × 2^1074 rounded to nearest-even, for |self| < 2^-1022.
    /// A carry into 2^52 is the bit pattern of the smallest normal.
    fn subnormal_bits(&self) -> u64 {
        let shift = self.exp + 1074;
        if shift >= 0 {
            return (&self.mant << shift as usize).to_u64().unwrap_or(0);
        }

        let drop = shift.unsigned_abs() as usize;
        let quotient = &self.mant >> drop;
        let remainder = &self.mant - (&quotient << drop);
        let half = BigUint::one() << (drop - 1);
        let round_up = match remainder.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Equal => quotient.is_odd(),
            Ordering::Less => false,
        };

        let bits = quotient.to_u64().unwrap_or(0);
        if round_up {
            bits + 1
        } else {
            bits
        }
    }

    fn signed(&self) -> BigInt {
        let sign = if self.neg { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, self.mant.clone())
    }

    fn shifted_magnitude(&self, k: i64) -> BigUint {
        let shift = self.exp + k;
        if shift >= 0 {
            &self.mant << shift as usize
        } else {
            &self.mant >> shift.unsigned_abs() as usize
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.mant_exp().cmp(&other.mant_exp()) {
            Ordering::Equal => {
                let exp = self.exp.min(other.exp);
                let lhs = &self.mant << (self.exp - exp) as usize;
                let rhs = &other.mant << (other.exp - exp) as usize;
                lhs.cmp(&rhs)
            }
            ordering => ordering,
        }
    }

    /// `(-1)^neg × num / den × 2^exp`, rounded to `prec` bits.
    fn from_ratio(neg: bool, num: &BigUint, den: &BigUint, exp: i64, prec: u32) -> Self {
        if num.is_zero() {
            return Self::zero();
        }

        // Enough quotient bits for a round bit plus a guard bit
        let shift = (i64::from(prec) + 2 + den.bits() as i64 - num.bits() as i64).max(0);
        let (quotient, remainder) = (num << shift as usize).div_rem(den);

        Self::round(neg, quotient, exp - shift, prec, !remainder.is_zero())
    }

    /// Round `mant × 2^exp` to `prec` bits. `sticky` records that the true
    /// value lies strictly above `mant × 2^exp`.
    fn round(neg: bool, mant: BigUint, exp: i64, prec: u32, sticky: bool) -> Self {
        if mant.is_zero() {
            return Self::zero();
        }

        let bits = mant.bits();
        let (mant, exp) = if bits > u64::from(prec) {
            let shift = (bits - u64::from(prec)) as usize;
            let mask = (BigUint::one() << shift) - 1u32;
            let half = BigUint::one() << (shift - 1);
            let dropped = &mant & &mask;
            let mut kept = mant >> shift;

            let round_up = match dropped.cmp(&half) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => sticky || kept.is_odd(),
            };
            if round_up {
                kept += 1u32;
            }
            (kept, exp + shift as i64)
        } else {
            (mant, exp)
        };

        Self::normalized(neg, mant, exp)
    }

    fn normalized(neg: bool, mant: BigUint, exp: i64) -> Self {
        match mant.trailing_zeros() {
            None => Self::zero(),
            Some(zeros) => Self {
                neg,
                mant: mant >> zeros as usize,
                exp: exp + zeros as i64,
            },
        }
    }
}

impl Default for BigFloat {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal if self.neg => self.cmp_magnitude(other).reverse(),
            Ordering::Equal => self.cmp_magnitude(other),
            ordering => ordering,
        }
    }
}
