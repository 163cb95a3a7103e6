use anyhow::Result;
use chrono::NaiveDate;

use crate::{
    app::Portfolio,
    config::Settings,
    services::{
        AppendOutcome, Delivery, LedgerWriter, Mailer, MarketCalendar, PriceHistory, build_rows,
        fetch_quotes, is_trading_day, notify,
    },
};

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// The exchange has no session: nothing fetched, written or sent.
    MarketClosed { date: NaiveDate },
    /// Every ticker was skipped; the ledger was not touched.
    NoQuotes { date: NaiveDate, skipped: Vec<String> },
    Recorded {
        date: NaiveDate,
        rows: usize,
        skipped: Vec<String>,
        delivery: Delivery,
    },
}

/// One daily run: gate, fetch, append, notify.
pub struct App<C, P, M> {
    pub(crate) calendar: C,
    pub(crate) prices: P,
    pub(crate) mailer: M,
    portfolio: Portfolio,
    settings: Settings,
}

impl<C, P, M> App<C, P, M>
where
    C: MarketCalendar,
    P: PriceHistory,
    M: Mailer,
{
    pub fn new(calendar: C, prices: P, mailer: M, portfolio: Portfolio, settings: Settings) -> Self {
        Self {
            calendar,
            prices,
            mailer,
            portfolio,
            settings,
        }
    }

    /// Runs the pipeline for `date`, or for today on the configured exchange.
    /// `date` only moves the gate check and the mail subject: quotes are the
    /// latest bars the provider has now, dated by their own sessions.
    /// Calendar, ledger I/O and mail transport errors are returned; per-ticker
    /// failures only show up as skipped tickers in the outcome.
    pub async fn run(&self, date: Option<NaiveDate>) -> Result<RunOutcome> {
        let exchange = *self.settings.exchange();
        let date = date.unwrap_or_else(|| exchange.today());

        if !is_trading_day(&self.calendar, exchange, Some(date)).await? {
            tracing::info!(%exchange, %date, "not a trading day, nothing to do");
            return Ok(RunOutcome::MarketClosed { date });
        }

        let positions = self.portfolio.positions();
        tracing::info!(%date, tickers = positions.len(), "fetching latest closes");
        let batch = fetch_quotes(&self.prices, positions).await;
        let skipped = batch.skipped();

        let rows = build_rows(&batch.quotes(), positions);
        let writer = LedgerWriter::new(self.settings.ledger_path());
        let rows = match writer.append(&rows)? {
            AppendOutcome::Empty => {
                tracing::warn!(%date, skipped = skipped.len(), "no quotes fetched, ledger unchanged");
                return Ok(RunOutcome::NoQuotes { date, skipped });
            }
            AppendOutcome::Appended { rows, .. } => rows,
        };

        let delivery = notify(&self.mailer, self.settings.email(), writer.path(), date).await?;

        Ok(RunOutcome::Recorded {
            date,
            rows,
            skipped,
            delivery,
        })
    }
}
