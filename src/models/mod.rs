pub mod exchange;
pub mod ledger_row;
pub mod position;
pub mod price_point;
pub mod quote;

pub use exchange::Exchange;
pub use ledger_row::{LEDGER_COLUMNS, LedgerRow};
pub use position::Position;
pub use price_point::PricePoint;
pub use quote::Quote;
