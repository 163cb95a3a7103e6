use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResponseDto {
    pub chart: YahooChartDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    pub result: Option<Vec<YahooChartResultDto>>,
    pub error: Option<YahooChartErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResultDto {
    meta: YahooChartMetaDto,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicatorsDto,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMetaDto {
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooQuoteSeriesDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooQuoteSeriesDto {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartErrorDto {
    code: String,
    description: Option<String>,
}
