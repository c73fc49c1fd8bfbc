// ============================================================================
// Newton-Raphson Roots
// n-th roots to a relative convergence margin at working precision
// ============================================================================
//
// Iterates f(x) = x^n - a from x_0 = 1 using
//
//     x_(k+1) = (1/n) × [ (n-1) × x_k + a × (1/x_k)^(n-1) ]
//
// where (1/x_k)^(n-1) is built by square-and-multiply over the bits of n-1.
// x_0 = 1 lies on one side of the root and the first step always lands
// above it (AM-GM). In exact arithmetic the iterates would then decrease
// monotonically; rounded to 256 bits they end in a cycle a few ulps wide
// that the margin test alone may never accept. Once the relative step is
// within SETTLE_GUARD_BITS of the margin, a step that fails to shrink ends
// the iteration at the smaller of the last two iterates.

use super::errors::{NumericError, NumericResult};
use super::float::BigFloat;
use super::ledger_decimal::{LedgerDecimal, WORKING_PRECISION};
use crate::config::RootConfig;

const SETTLE_GUARD_BITS: u32 = 16;

impl LedgerDecimal {
    /// Square root with the default [`RootConfig`].
    pub fn sqrt(&self) -> NumericResult<Self> {
        self.root(2)
    }

    /// Square root with an explicit [`RootConfig`].
    pub fn sqrt_with(&self, config: &RootConfig) -> NumericResult<Self> {
        self.root_with(2, config)
    }

    /// Real `n`-th root with the default [`RootConfig`].
    pub fn root(&self, n: u64) -> NumericResult<Self> {
        self.root_with(n, &RootConfig::default())
    }

    /// Real `n`-th root of a non-negative value.
    ///
    /// # Errors
    /// - `DegenerateArgument` for `n == 0`
    /// - `Negative` if `self` is below zero
    /// - `NonConvergence` if the iteration neither meets the margin nor
    ///   settles within [`RootConfig::iteration_cap`] steps
    /// - `InvalidConfig` if `config` fails validation
    pub fn root_with(&self, n: u64, config: &RootConfig) -> NumericResult<Self> {
        config.validate()?;

        if n == 0 {
            return Err(NumericError::DegenerateArgument("zeroth root"));
        }
        if self.is_negative() {
            return Err(NumericError::Negative);
        }
        // Zero would otherwise shrink geometrically and never meet a relative margin
        if n == 1 || self.is_zero() {
            return Ok(self.clone());
        }

        newton_root(self, n, config)
    }
}

fn newton_root(a: &LedgerDecimal, n: u64, config: &RootConfig) -> NumericResult<LedgerDecimal> {
    let one = LedgerDecimal::one();
    let two = LedgerDecimal::new(2.0);
    let n1 = n - 1;
    let n1f = LedgerDecimal::from_float(BigFloat::from_u64(n1, WORKING_PRECISION));
    let rn = one.checked_div(&LedgerDecimal::from_float(BigFloat::from_u64(
        n,
        WORKING_PRECISION,
    )))?;
    let limit = two.pow(u64::from(config.precision_margin));
    let settle = two.pow(u64::from(
        config.precision_margin.saturating_sub(SETTLE_GUARD_BITS),
    ));
    let cap = config.iteration_cap(n, a.mant_exp());

    let mut x = one.clone();
    let mut last_step: Option<LedgerDecimal> = None;
    for iteration in 1..=cap {
        let mut power = one.checked_div(&x)?;
        let mut term = a.clone();
        let mut bits = n1;
        while bits > 0 {
            if bits & 1 == 1 {
                term = &term * &power;
            }
            bits >>= 1;
            if bits > 0 {
                power = &power * &power;
            }
        }

        let next = &rn * &(&(&n1f * &x) + &term);
        let step = (&next - &x).abs();
        tracing::trace!(iteration, estimate = %next, step = %step, "newton step");

        if &step * &limit < next {
            tracing::debug!(n, iterations = iteration, "root converged");
            return Ok(next);
        }

        // Rounding noise: the step no longer shrinks
        let stalled = matches!(&last_step, Some(last) if step >= *last);
        if stalled && &step * &settle < next {
            tracing::debug!(n, iterations = iteration, step = %step, "root settled");
            return Ok(x.min(next));
        }

        last_step = Some(step);
        x = next;
    }

    tracing::warn!(
        n,
        max_iterations = cap,
        margin = config.precision_margin,
        "root did not converge"
    );
    Err(NumericError::NonConvergence { iterations: cap })
}
