use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    alpaca_dto::AlpacaCalendarDayDto,
    utils::{make_request, parse_response_array},
};
use crate::{config::CalendarSettings, models::Exchange, services::MarketCalendar};

pub const BASE_URL: &str = "https://paper-api.alpaca.markets";

pub async fn get_calendar(
    start: NaiveDate,
    end: NaiveDate,
    client: &Client,
    base_url: &str,
    key_id: &str,
    secret_key: &str,
) -> Result<Vec<AlpacaCalendarDayDto>> {
    let params = format!(
        "start={}&end={}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    );
    let headers = [
        ("APCA-API-KEY-ID", key_id),
        ("APCA-API-SECRET-KEY", secret_key),
    ];
    let res = make_request(client, base_url, "v2/calendar", &params, &headers).await?;

    parse_response_array::<AlpacaCalendarDayDto>(
        res,
        &format!("Failed to parse Alpaca calendar for {} to {}", start, end),
    )
}

/// True when the returned schedule lists a session on `date` itself.
pub fn has_session(days: &[AlpacaCalendarDayDto], date: NaiveDate) -> bool {
    days.iter().any(|day| *day.date() == date)
}

/// Exchange schedule backed by Alpaca's calendar endpoint. Alpaca publishes
/// the US equities schedule, which covers both NYSE and Nasdaq.
#[derive(Clone, Debug)]
pub struct AlpacaCalendar {
    client: Client,
    settings: CalendarSettings,
}

impl AlpacaCalendar {
    pub fn new(settings: CalendarSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

impl MarketCalendar for AlpacaCalendar {
    async fn is_session(&self, exchange: Exchange, date: NaiveDate) -> Result<bool> {
        let (Some(key_id), Some(secret_key)) =
            (self.settings.key_id(), self.settings.secret_key())
        else {
            bail!("Market calendar credentials missing: set APCA_API_KEY_ID and APCA_API_SECRET_KEY");
        };

        let days = get_calendar(
            date,
            date,
            &self.client,
            self.settings.base_url(),
            key_id,
            secret_key,
        )
        .await
        .with_context(|| format!("Alpaca calendar ({} {})", exchange.mic(), date))?;

        Ok(has_session(&days, date))
    }
}
