#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        models::{Position, PricePoint, Quote},
        services::{
            FetchError, FetchOutcome, LOOKBACK_DAYS, fetch_quotes, quote_fetcher::latest_quote,
        },
        test::fakes::{FakePrices, date},
    };

    fn position(ticker: &str) -> Position {
        Position::new(ticker.to_string(), 10, Some(dec!(10)))
    }

    #[test]
    fn latest_quote_uses_last_session_with_a_close() {
        let history = vec![
            PricePoint::new(date("2024-03-13"), Some(dec!(10.10))),
            PricePoint::new(date("2024-03-15"), None),
            PricePoint::new(date("2024-03-11"), Some(dec!(9.90))),
            PricePoint::new(date("2024-03-14"), Some(dec!(10.42))),
        ];

        let quote = latest_quote("SMR", &history).unwrap();

        assert_eq!(quote, Quote::new("SMR".into(), date("2024-03-14"), dec!(10.42)));
    }

    #[test]
    fn latest_quote_fails_when_every_close_is_missing() {
        let history = vec![
            PricePoint::new(date("2024-03-14"), None),
            PricePoint::new(date("2024-03-15"), None),
        ];

        assert_eq!(
            latest_quote("UEC", &history),
            Err(FetchError::EmptyHistory(LOOKBACK_DAYS))
        );
        assert_eq!(
            latest_quote("UEC", &[]),
            Err(FetchError::EmptyHistory(LOOKBACK_DAYS))
        );
    }

    #[tokio::test]
    async fn failing_tickers_are_skipped_and_order_is_kept() {
        let prices = FakePrices::default()
            .with_history("SMR", vec![PricePoint::new(date("2024-03-15"), Some(dec!(21.5)))])
            .with_failure("SNOW", "connection reset")
            .with_history("UAMY", vec![PricePoint::new(date("2024-03-15"), None)])
            .with_history("UEC", vec![PricePoint::new(date("2024-03-15"), Some(dec!(7.25)))]);
        let positions = vec![position("SMR"), position("SNOW"), position("UAMY"), position("UEC")];

        let batch = fetch_quotes(&prices, &positions).await;

        let tickers: Vec<String> = batch.quotes().iter().map(|q| q.ticker().clone()).collect();
        assert_eq!(tickers, vec!["SMR", "UEC"]);
        assert_eq!(batch.skipped(), vec!["SNOW", "UAMY"]);
        assert_eq!(batch.outcomes().len(), 4);

        match &batch.outcomes()[1] {
            FetchOutcome::Skipped { ticker, reason } => {
                assert_eq!(ticker, "SNOW");
                assert!(matches!(reason, FetchError::Provider(msg) if msg.contains("connection reset")));
            }
            other => panic!("expected SNOW to be skipped, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn every_ticker_gets_a_seven_day_window() {
        let prices = FakePrices::default();
        let positions = vec![position("SMR"), position("RCAT")];

        let batch = fetch_quotes(&prices, &positions).await;

        assert!(batch.quotes().is_empty());
        assert_eq!(
            *prices.requests.borrow(),
            vec![("SMR".to_string(), 7), ("RCAT".to_string(), 7)]
        );
    }
}
