use std::{collections::HashSet, path::Path};

use anyhow::{Context, Error, Result};
use csv::ReaderBuilder;
use rust_decimal_macros::dec;

use crate::{
    app::utils::parse_optional_decimal,
    models::Position,
};

/// The tracked positions. Fixed for the lifetime of a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        let mut seen = HashSet::new();
        for position in &positions {
            if !seen.insert(position.ticker().as_str()) {
                return Err(Error::msg(format!(
                    "Duplicate ticker '{}' in portfolio",
                    position.ticker()
                )));
            }
        }
        Ok(Self { positions })
    }

    pub fn builtin() -> Self {
        let holding = |ticker: &str, shares, avg| Position::new(ticker.to_string(), shares, Some(avg));
        Self {
            positions: vec![
                holding("SMR", 10, dec!(44.363)),
                holding("SNOW", 4, dec!(196.3525)),
                holding("UAMY", 50, dec!(4.034)),
                holding("UEC", 20, dec!(9.3295)),
                holding("UUUU", 50, dec!(8.2982)),
                holding("AMPX", 100, dec!(7.8979)),
                holding("RCAT", 70, dec!(9.320857)),
            ],
        }
    }

    /// Reads a `Ticker, Shares, Avg Buy Price` CSV. The price column may be
    /// blank for tickers that are watched but not held.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open portfolio CSV at path: {}", path.display()))?;

        let mut positions = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read portfolio record at row {}", row_idx + 1))?;

            if rec.len() < 2 {
                return Err(Error::msg(format!(
                    "Invalid portfolio format at row {}: expected at least 2 columns, found {}",
                    row_idx + 1,
                    rec.len()
                )));
            }

            let ticker = rec[0].to_uppercase();
            if ticker.is_empty() {
                return Err(Error::msg(format!("Missing ticker at row {}", row_idx + 1)));
            }

            let shares = rec[1].parse::<u32>().with_context(|| {
                format!("Failed to parse shares '{}' at row {}", &rec[1], row_idx + 1)
            })?;

            let avg_buy_price = parse_optional_decimal(rec.get(2).unwrap_or(""), "avg buy price")
                .with_context(|| format!("Invalid portfolio row {}", row_idx + 1))?;

            positions.push(Position::new(ticker, shares, avg_buy_price));
        }

        Self::new(positions)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}
