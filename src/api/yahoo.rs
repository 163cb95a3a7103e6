use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Days, TimeZone, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use super::{
    utils::{make_request, parse_response_object},
    yahoo_dto::{YahooChartResponseDto, YahooChartResultDto},
};
use crate::{models::PricePoint, services::PriceHistory};

pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stock-ledger/0.1";

pub async fn get_daily_chart(
    symbol: &str,
    client: &Client,
    base_url: &str,
    lookback_days: u32,
    now: DateTime<Utc>,
) -> Result<YahooChartResultDto> {
    let start = now
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .with_context(|| format!("Lookback of {} days is out of range", lookback_days))?;
    let params = format!(
        "period1={}&period2={}&interval=1d&events=history",
        start.timestamp(),
        now.timestamp()
    );
    let res = make_request(client, base_url, symbol, &params, &[]).await?;

    let response = parse_response_object::<YahooChartResponseDto>(
        res,
        &format!("Failed to parse Yahoo chart for {}", symbol),
    )?;

    if let Some(error) = response.chart().error() {
        return Err(anyhow!(
            "Yahoo chart error for {}: {} {}",
            symbol,
            error.code(),
            error.description().as_deref().unwrap_or("")
        ));
    }

    response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .with_context(|| format!("No chart result for symbol {}", symbol))
}

/// Converts a chart to one point per bar, dated in the exchange's timezone.
/// `fallback_tz` is used when the chart does not name its exchange timezone.
pub fn to_price_points(chart: &YahooChartResultDto, fallback_tz: Tz) -> Result<Vec<PricePoint>> {
    let tz = chart
        .meta()
        .exchange_timezone_name()
        .as_deref()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(fallback_tz);

    let closes = chart
        .indicators()
        .quote()
        .first()
        .map(|series| series.close().as_slice())
        .unwrap_or(&[]);

    chart
        .timestamp()
        .iter()
        .enumerate()
        .map(|(idx, ts)| {
            let date = Utc
                .timestamp_opt(*ts, 0)
                .single()
                .with_context(|| format!("Invalid bar timestamp {}", ts))?
                .with_timezone(&tz)
                .date_naive();
            let close = closes
                .get(idx)
                .copied()
                .flatten()
                .and_then(Decimal::from_f64);
            Ok(PricePoint::new(date, close))
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct YahooFinance {
    client: Client,
    base_url: String,
    timezone: Tz,
}

impl YahooFinance {
    pub fn new(base_url: &str, timezone: Tz) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client for Yahoo Finance")?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timezone,
        })
    }
}

impl PriceHistory for YahooFinance {
    async fn daily_closes(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PricePoint>> {
        let chart =
            get_daily_chart(symbol, &self.client, &self.base_url, lookback_days, Utc::now())
                .await?;
        to_price_points(&chart, self.timezone)
    }
}
