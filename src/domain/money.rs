use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for currency comparison.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a currency value to 2 decimal places, half away from zero.
///
/// Every reconciliation comparison rounds both sides through this one
/// function, so the rounding policy cannot drift between the declared total
/// and the recomputed detail sum.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    // Pad to exactly two places so a zero sum renders as 0.00, not 0.
    rounded.rescale(CURRENCY_DP);
    rounded
}
