use std::{
    collections::HashMap,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::{
    app::calc::{pl_percent, round_price},
    models::{LedgerRow, Position, Quote},
};

#[derive(Debug, PartialEq)]
pub enum AppendOutcome {
    /// No rows were given; the file was not touched.
    Empty,
    Appended { rows: usize, header_written: bool },
}

/// Joins each quote with its position. Quotes without a position are
/// dropped with a warning.
pub fn build_rows(quotes: &[Quote], positions: &[Position]) -> Vec<LedgerRow> {
    let by_ticker: HashMap<&str, &Position> = positions
        .iter()
        .map(|position| (position.ticker().as_str(), position))
        .collect();

    quotes
        .iter()
        .filter_map(|quote| {
            let Some(position) = by_ticker.get(quote.ticker().as_str()) else {
                tracing::warn!(ticker = %quote.ticker(), "quote has no matching position");
                return None;
            };
            let close = *quote.close_price();
            Some(LedgerRow::new(
                *quote.date(),
                quote.ticker().clone(),
                *position.shares(),
                *position.avg_buy_price(),
                round_price(close),
                pl_percent(close, position.cost_basis()),
            ))
        })
        .collect()
}

/// Append-only CSV ledger. Each append is a plain file write: a crash in the
/// middle can leave a partial last line.
#[derive(Clone, Debug)]
pub struct LedgerWriter {
    path: PathBuf,
}

impl LedgerWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, rows: &[LedgerRow]) -> Result<AppendOutcome> {
        if rows.is_empty() {
            return Ok(AppendOutcome::Empty);
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open ledger at {}", self.path.display()))?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        for (idx, row) in rows.iter().enumerate() {
            writer.serialize(row).with_context(|| {
                format!(
                    "Failed to write ledger row {} ({}) to {}",
                    idx + 1,
                    row.ticker(),
                    self.path.display()
                )
            })?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush ledger at {}", self.path.display()))?;

        tracing::info!(
            path = %self.path.display(),
            rows = rows.len(),
            header = needs_header,
            "appended ledger rows"
        );

        Ok(AppendOutcome::Appended {
            rows: rows.len(),
            header_written: needs_header,
        })
    }
}
