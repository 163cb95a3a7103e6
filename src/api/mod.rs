pub mod alpaca;
pub mod alpaca_dto;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use alpaca::AlpacaCalendar;
pub use yahoo::YahooFinance;
