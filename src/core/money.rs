//! Cent rounding and the settled-balance threshold
//!
//! Balances are computed at full decimal precision. Per-capita division leaves
//! long fractional tails (100 / 3), so the settlement planner works in cents
//! and treats anything within one cent of zero as settled.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money is rounded to
pub const CENT_SCALE: u32 = 2;

/// One cent (0.01)
///
/// Balances with a magnitude at or below this are considered settled.
pub fn cent() -> Decimal {
    Decimal::new(1, CENT_SCALE)
}

/// Round to cents, halves away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether a balance is within one cent of zero
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= cent()
}

/// Largest per-participant residual a correct plan can leave
///
/// Rounding moves each balance by at most half a cent, and the planner leaves
/// up to one cent with every participant it skips or clears. Whatever the
/// other participants keep ends up with the last unmatched one.
pub fn residual_tolerance(participants: usize) -> Decimal {
    cent() + Decimal::new(15, 3) * Decimal::from(participants)
}
