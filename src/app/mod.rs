pub mod app;
pub mod calc;
pub mod portfolio;
pub mod utils;

pub use app::{App, RunOutcome};
pub use portfolio::Portfolio;
