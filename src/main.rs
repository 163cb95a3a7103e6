use anyhow::{Context, Result};
use clap::Parser;
use stock_ledger::{
    api::{AlpacaCalendar, YahooFinance},
    app::{App, Portfolio, RunOutcome},
    cli::Cli,
    config::Settings,
    services::{Delivery, SmtpMailer},
};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<()> {
    let filter = std::env::var("STOCK_LEDGER_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| String::from("info"));
    let env_filter = EnvFilter::try_new(&filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let settings = Settings::from_env(&cli);

    let portfolio = match settings.portfolio_path() {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::builtin(),
    };

    let calendar = AlpacaCalendar::new(settings.calendar().clone());
    let prices = YahooFinance::new(settings.market_data_url(), settings.exchange().timezone())?;

    let app = App::new(calendar, prices, SmtpMailer, portfolio, settings);

    match app.run(cli.date).await? {
        RunOutcome::MarketClosed { date } => {
            tracing::info!(%date, "market closed");
        }
        RunOutcome::NoQuotes { date, skipped } => {
            tracing::info!(%date, skipped = ?skipped, "no rows recorded");
        }
        RunOutcome::Recorded {
            date,
            rows,
            skipped,
            delivery,
        } => {
            let emailed = matches!(delivery, Delivery::Sent(_));
            tracing::info!(%date, rows, skipped = ?skipped, emailed, "run complete");
        }
    }

    Ok(())
}
