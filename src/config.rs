// ============================================================================
// Root Finding Configuration
// Convergence margin and iteration cap for Newton-Raphson roots
// ============================================================================

use crate::numeric::{NumericError, NumericResult, WORKING_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence margin in bits.
///
/// Iteration stops once `|x_k - x_(k-1)| × 2^margin < x_k`, or once the
/// rounded iteration has settled into a cycle a few ulps wide. At 256-bit
/// working precision a margin of 255 accepts a final one-ulp step; 256 only
/// accepts an exact fixed point.
pub const PRECISION_MARGIN: u32 = 255;

/// Default iteration floor (4 × working precision).
pub const MAX_ITERATIONS: u32 = 4 * WORKING_PRECISION;

/// Default per-degree iteration budget.
///
/// Starting from `x_0 = 1` the linear phase of an n-th root of `a` takes about
/// `n × ln(a)` steps above one and `ln(1/a)` steps below it.
pub const ITERATIONS_PER_DEGREE: u32 = 64;

/// Configuration for [`LedgerDecimal::root_with`](crate::numeric::LedgerDecimal::root_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RootConfig {
    /// Relative step size, in bits, below which the estimate is accepted
    pub precision_margin: u32,

    /// Newton steps always allowed before reporting non-convergence
    pub max_iterations: u32,

    /// Extra steps granted per degree and per bit of operand magnitude.
    /// Zero makes `max_iterations` a hard cap.
    pub iterations_per_degree: u32,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            precision_margin: PRECISION_MARGIN,
            max_iterations: MAX_ITERATIONS,
            iterations_per_degree: ITERATIONS_PER_DEGREE,
        }
    }
}

impl RootConfig {
    pub fn new(precision_margin: u32, max_iterations: u32) -> Self {
        Self {
            precision_margin,
            max_iterations,
            ..Self::default()
        }
    }

    /// Builder method: Set convergence margin
    pub fn with_precision_margin(mut self, bits: u32) -> Self {
        self.precision_margin = bits;
        self
    }

    /// Builder method: Set iteration cap
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder method: Set per-degree iteration budget
    pub fn with_iterations_per_degree(mut self, iterations: u32) -> Self {
        self.iterations_per_degree = iterations;
        self
    }

    /// Steps allowed for an `n`-th root of an operand whose binary exponent
    /// (see [`mant_exp`](crate::numeric::LedgerDecimal::mant_exp)) is
    /// `magnitude`: `max(max_iterations, n × (iterations_per_degree + |magnitude|))`,
    /// or just `max_iterations` when the per-degree budget is zero.
    pub fn iteration_cap(&self, n: u64, magnitude: i64) -> u32 {
        if self.iterations_per_degree == 0 {
            return self.max_iterations;
        }
        let per_degree = u64::from(self.iterations_per_degree) + magnitude.unsigned_abs();
        let scaled = n.saturating_mul(per_degree);
        self.max_iterations.max(u32::try_from(scaled).unwrap_or(u32::MAX))
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_iterations == 0 {
            return Err(NumericError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }

        if self.precision_margin > 2 * WORKING_PRECISION {
            return Err(NumericError::InvalidConfig(format!(
                "precision_margin must not exceed {} bits",
                2 * WORKING_PRECISION
            )));
        }

        Ok(())
    }

    /// Requires an exact fixed point at working precision
    pub fn strict() -> Self {
        Self::default().with_precision_margin(WORKING_PRECISION)
    }

    /// Half the working precision, for estimates that do not need every bit
    pub fn fast() -> Self {
        Self::default().with_precision_margin(WORKING_PRECISION / 2)
    }
}
