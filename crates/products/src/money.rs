//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to two decimals, half-up, and pin the scale so that `79`
/// renders as `79.00`.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}
