#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        api::{
            alpaca_dto::AlpacaCalendarDayDto,
            utils::{parse_response_array, parse_response_object},
            yahoo::to_price_points,
            yahoo_dto::YahooChartResponseDto,
        },
        models::PricePoint,
        services::quote_fetcher::latest_quote,
        test::fakes::date,
    };

    fn chart(timezone: Option<&str>) -> serde_json::Value {
        json!({
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "SMR",
                        "currency": "USD",
                        "exchangeTimezoneName": timezone
                    },
                    "timestamp": [1710336600, 1710423000, 1710509400],
                    "indicators": {
                        "quote": [{ "close": [20.5, 21.25, null] }]
                    }
                }],
                "error": null
            }
        })
    }

    #[test]
    fn chart_maps_to_dated_points() {
        let response =
            parse_response_object::<YahooChartResponseDto>(chart(Some("America/New_York")), "chart")
                .unwrap();
        let results = response.chart.result.unwrap();
        let result = &results[0];

        let points = to_price_points(result, chrono_tz::UTC).unwrap();

        assert_eq!(
            points,
            vec![
                PricePoint::new(date("2024-03-13"), Some(dec!(20.5))),
                PricePoint::new(date("2024-03-14"), Some(dec!(21.25))),
                PricePoint::new(date("2024-03-15"), None),
            ]
        );
        assert_eq!(*latest_quote("SMR", &points).unwrap().date(), date("2024-03-14"));
    }

    #[test]
    fn bar_dates_use_the_exchange_timezone() {
        // 02:00 UTC on the 15th is still the evening of the 14th in New York.
        let value = json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "SMR" },
                    "timestamp": [1710468000],
                    "indicators": { "quote": [{ "close": [19.0] }] }
                }],
                "error": null
            }
        });
        let response = parse_response_object::<YahooChartResponseDto>(value, "chart").unwrap();
        let results = response.chart.result.unwrap();
        let result = &results[0];

        let points = to_price_points(result, chrono_tz::America::New_York).unwrap();

        assert_eq!(points, vec![PricePoint::new(date("2024-03-14"), Some(dec!(19)))]);
    }

    #[test]
    fn chart_without_bars_is_empty() {
        let value = json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "SMR" },
                    "indicators": { "quote": [] }
                }],
                "error": null
            }
        });
        let response = parse_response_object::<YahooChartResponseDto>(value, "chart").unwrap();
        let results = response.chart.result.unwrap();
        let result = &results[0];

        assert!(to_price_points(result, chrono_tz::UTC).unwrap().is_empty());
    }

    #[test]
    fn calendar_days_parse_and_empty_list_is_valid() {
        let days = parse_response_array::<AlpacaCalendarDayDto>(
            json!([{
                "date": "2024-03-15",
                "open": "09:30",
                "close": "16:00",
                "session_open": "0400",
                "session_close": "2000",
                "settlement_date": "2024-03-19"
            }]),
            "calendar",
        )
        .unwrap();
        assert_eq!(*days[0].date(), date("2024-03-15"));

        let none = parse_response_array::<AlpacaCalendarDayDto>(json!([]), "calendar").unwrap();
        assert!(none.is_empty());

        assert!(parse_response_array::<AlpacaCalendarDayDto>(json!({}), "calendar").is_err());
    }
}
