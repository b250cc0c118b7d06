//! Tax-inclusive total computation.
//!
//! Shared by both transaction-log paths and by the presentation layer's
//! reactive total display. `compute_total` is exact `Decimal` arithmetic;
//! rounding happens once, at the boundary between computed and persisted
//! values, via [`round_for_storage`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits used for currency at the storage boundary.
pub const CURRENCY_SCALE: u32 = 2;

/// `subtotal + subtotal * tax_percent / 100`, exactly.
///
/// Pure and deterministic; no rounding is applied here.
pub fn compute_total(quantity: i32, rate_per_unit: Decimal, tax_percent: Decimal) -> Decimal {
    let subtotal = Decimal::from(quantity) * rate_per_unit;
    subtotal + subtotal * tax_percent / Decimal::ONE_HUNDRED
}

/// The documented rounding rule for persisted amounts: two fractional
/// digits, midpoint away from zero. Idempotent, so stored values round-trip
/// stably.
pub fn round_for_storage(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
