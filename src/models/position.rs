use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Position {
    ticker: String,
    shares: u32,
    avg_buy_price: Option<Decimal>,
}

impl Position {
    /// Average buy price usable as a P/L denominator. Zero counts as unknown.
    pub fn cost_basis(&self) -> Option<Decimal> {
        self.avg_buy_price.filter(|price| !price.is_zero())
    }
}
