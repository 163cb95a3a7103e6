use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const LEDGER_COLUMNS: [&str; 6] = [
    "Date",
    "Ticker",
    "Shares",
    "Avg Buy Price",
    "Latest Close",
    "P/L (%)",
];

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct LedgerRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Shares")]
    shares: u32,
    #[serde(rename = "Avg Buy Price")]
    avg_buy_price: Option<Decimal>,
    #[serde(rename = "Latest Close")]
    latest_close: Decimal,
    #[serde(rename = "P/L (%)")]
    pl_percent: Option<Decimal>,
}
