use std::path::PathBuf;

use derive_getters::Getters;

use crate::{
    api::{alpaca, yahoo},
    cli::Cli,
    models::Exchange,
};

pub const DEFAULT_LEDGER_PATH: &str = "stock_ledger.csv";

#[derive(Clone, Debug, Getters)]
pub struct Settings {
    exchange: Exchange,
    ledger_path: PathBuf,
    portfolio_path: Option<PathBuf>,
    market_data_url: String,
    calendar: CalendarSettings,
    email: EmailSettings,
}

impl Settings {
    pub fn from_env(cli: &Cli) -> Self {
        Self::from_lookup(cli, |key| std::env::var(key).ok())
    }

    /// Builds settings from CLI flags plus a key lookup standing in for the
    /// process environment.
    pub fn from_lookup<F>(cli: &Cli, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            exchange: cli.exchange,
            ledger_path: expand_path(&cli.ledger),
            portfolio_path: cli.portfolio.as_deref().map(expand_path),
            market_data_url: non_empty(&lookup, "STOCK_LEDGER_MARKET_DATA_URL")
                .unwrap_or_else(|| yahoo::BASE_URL.to_string()),
            calendar: CalendarSettings::from_lookup(&lookup),
            email: EmailSettings::from_lookup(&lookup),
        }
    }
}

#[derive(Clone, Debug, Getters)]
pub struct CalendarSettings {
    base_url: String,
    #[getter(skip)]
    key_id: Option<String>,
    #[getter(skip)]
    secret_key: Option<String>,
}

impl CalendarSettings {
    pub fn new(base_url: &str, key_id: Option<String>, secret_key: Option<String>) -> Self {
        Self {
            base_url: base_url.to_string(),
            key_id,
            secret_key,
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: non_empty(lookup, "APCA_API_BASE_URL")
                .unwrap_or_else(|| alpaca::BASE_URL.to_string()),
            key_id: non_empty(lookup, "APCA_API_KEY_ID"),
            secret_key: non_empty(lookup, "APCA_API_SECRET_KEY"),
        }
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }
}

/// Raw mail credentials. Blank values are stored as `None`.
#[derive(Clone, Debug, Default, Getters)]
pub struct EmailSettings {
    email_to: Option<String>,
    sg_api_key: Option<String>,
    email_from: Option<String>,
    email_user: Option<String>,
    email_pass: Option<String>,
    outlook_user: Option<String>,
    outlook_pass: Option<String>,
}

impl EmailSettings {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            email_to: non_empty(lookup, "EMAIL_TO"),
            sg_api_key: non_empty(lookup, "SG_API_KEY"),
            email_from: non_empty(lookup, "EMAIL_FROM"),
            email_user: non_empty(lookup, "EMAIL_USER"),
            email_pass: non_empty(lookup, "EMAIL_PASS"),
            outlook_user: non_empty(lookup, "OUTLOOK_USER"),
            outlook_pass: non_empty(lookup, "OUTLOOK_PASS"),
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
