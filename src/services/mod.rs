pub mod ledger_writer;
pub mod notifier;
pub mod quote_fetcher;
pub mod trading_gate;

pub use ledger_writer::{AppendOutcome, LedgerWriter, build_rows};
pub use notifier::{Delivery, LedgerMail, Mailer, Route, RouteKind, SmtpMailer, Transport, notify};
pub use quote_fetcher::{FetchBatch, FetchError, FetchOutcome, LOOKBACK_DAYS, PriceHistory, fetch_quotes};
pub use trading_gate::{MarketCalendar, is_trading_day};
