use chrono::NaiveDate;
use clap::Parser;

use crate::{app::utils::parse_date, config::DEFAULT_LEDGER_PATH, models::Exchange};

#[derive(Debug, Parser)]
#[command(name = "stock-ledger", version, about)]
pub struct Cli {
    #[arg(
        long,
        value_parser = parse_date,
        help = "Run the trading-day gate check for this date (YYYY-MM-DD) instead of today; gate check only, prices are always the latest bars"
    )]
    pub date: Option<NaiveDate>,
    #[arg(
        long,
        env = "STOCK_LEDGER_PATH",
        default_value = DEFAULT_LEDGER_PATH,
        help = "CSV ledger the daily rows are appended to"
    )]
    pub ledger: String,
    #[arg(
        long,
        env = "STOCK_LEDGER_PORTFOLIO",
        help = "Portfolio CSV (Ticker, Shares, Avg Buy Price); built-in holdings when omitted"
    )]
    pub portfolio: Option<String>,
    #[arg(
        long,
        env = "STOCK_LEDGER_EXCHANGE",
        value_enum,
        default_value_t = Exchange::Xnys,
        help = "Reference exchange for the trading calendar"
    )]
    pub exchange: Exchange,
}
