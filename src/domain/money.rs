//! Monetary rounding for stakes and profits.
//!
//! Arithmetic stays in `f64`; amounts are rounded to cents only when a
//! stake or profit is produced. Rounding goes through [`Decimal`] so the
//! exact binary value is rounded half-to-even, the same result a caller
//! gets from rounding the float directly to two places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of money in the stake currency.
pub type Amount = f64;

/// Round an amount to two decimal places.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_cents(value: Amount) -> Amount {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
