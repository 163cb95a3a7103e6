use anyhow::Result;
use thiserror::Error;

use crate::models::{Position, PricePoint, Quote};

/// Calendar days of history requested per ticker. Wide enough that the last
/// session is still covered after a long weekend or holiday.
pub const LOOKBACK_DAYS: u32 = 7;

/// Source of daily closing prices.
pub trait PriceHistory {
    fn daily_closes(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> impl Future<Output = Result<Vec<PricePoint>>>;
}

#[derive(Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("no closing price in the last {0} days")]
    EmptyHistory(u32),
    #[error("price request failed: {0}")]
    Provider(String),
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Fetched(Quote),
    Skipped { ticker: String, reason: FetchError },
}

/// Per-ticker results in portfolio order.
#[derive(Debug, Default)]
pub struct FetchBatch {
    outcomes: Vec<FetchOutcome>,
}

impl FetchBatch {
    pub fn new(outcomes: Vec<FetchOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[FetchOutcome] {
        &self.outcomes
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                FetchOutcome::Fetched(quote) => Some(quote.clone()),
                FetchOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                FetchOutcome::Skipped { ticker, .. } => Some(ticker.clone()),
                FetchOutcome::Fetched(_) => None,
            })
            .collect()
    }
}

/// Picks the most recent bar that has a close.
pub fn latest_quote(ticker: &str, history: &[PricePoint]) -> Result<Quote, FetchError> {
    history
        .iter()
        .filter_map(|point| point.close().map(|close| (*point.date(), close)))
        .max_by_key(|(date, _)| *date)
        .map(|(date, close)| Quote::new(ticker.to_string(), date, close))
        .ok_or(FetchError::EmptyHistory(LOOKBACK_DAYS))
}

pub async fn fetch_quote<P: PriceHistory>(source: &P, ticker: &str) -> FetchOutcome {
    let result = match source.daily_closes(ticker, LOOKBACK_DAYS).await {
        Ok(history) => latest_quote(ticker, &history),
        Err(err) => Err(FetchError::Provider(format!("{:#}", err))),
    };

    match result {
        Ok(quote) => {
            tracing::info!(
                ticker,
                date = %quote.date(),
                close = %quote.close_price(),
                "fetched latest close"
            );
            FetchOutcome::Fetched(quote)
        }
        Err(reason) => {
            tracing::warn!(ticker, %reason, "skipping ticker");
            FetchOutcome::Skipped {
                ticker: ticker.to_string(),
                reason,
            }
        }
    }
}

/// Fetches every position in order. A failing ticker is recorded as skipped
/// and never stops the batch.
pub async fn fetch_quotes<P: PriceHistory>(source: &P, positions: &[Position]) -> FetchBatch {
    let mut outcomes = Vec::with_capacity(positions.len());
    for position in positions {
        outcomes.push(fetch_quote(source, position.ticker()).await);
    }
    FetchBatch::new(outcomes)
}
