use anyhow::Result;
use chrono::NaiveDate;

use crate::models::Exchange;

/// A published exchange schedule.
pub trait MarketCalendar {
    fn is_session(&self, exchange: Exchange, date: NaiveDate) -> impl Future<Output = Result<bool>>;
}

/// Returns whether `exchange` holds a session on `date`, defaulting to the
/// current date in the exchange's timezone. Calendar failures are returned
/// unchanged; there is no fallback schedule.
pub async fn is_trading_day<C: MarketCalendar>(
    calendar: &C,
    exchange: Exchange,
    date: Option<NaiveDate>,
) -> Result<bool> {
    let date = date.unwrap_or_else(|| exchange.today());
    let open = calendar.is_session(exchange, date).await?;
    tracing::debug!(%exchange, %date, open, "checked trading calendar");
    Ok(open)
}
