use rust_decimal::{Decimal, RoundingStrategy};

pub const PRICE_DP: u32 = 4;
pub const PERCENT_DP: u32 = 2;

/// Rounded values carry no trailing zeros, so `47.1200` is written as `47.12`.
pub fn round_price(price: Decimal) -> Decimal {
    price
        .round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

pub fn round_percent(percent: Decimal) -> Decimal {
    percent
        .round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Unrealized P/L in percent of the average buy price. `None` when there is
/// no usable cost basis (missing or zero).
pub fn pl_percent(close: Decimal, avg_buy_price: Option<Decimal>) -> Option<Decimal> {
    let avg = avg_buy_price.filter(|avg| !avg.is_zero())?;
    let percent = (close - avg) / avg * Decimal::ONE_HUNDRED;
    Some(round_percent(percent))
}
