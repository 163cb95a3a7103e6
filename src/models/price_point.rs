use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One daily bar as reported by a market-data provider. `close` is `None`
/// when the provider returned a null for that session.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PricePoint {
    date: NaiveDate,
    close: Option<Decimal>,
}
