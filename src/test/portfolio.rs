#[cfg(test)]
mod tests {
    use std::{collections::HashSet, fs};

    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use crate::{app::Portfolio, models::Position};

    #[test]
    fn builtin_holdings_are_unique() {
        let portfolio = Portfolio::builtin();
        let tickers: HashSet<&str> = portfolio
            .positions()
            .iter()
            .map(|p| p.ticker().as_str())
            .collect();

        assert_eq!(tickers.len(), portfolio.positions().len());
        assert!(Portfolio::new(portfolio.positions().to_vec()).is_ok());
    }

    #[test]
    fn loads_csv_with_watch_only_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.csv");
        fs::write(
            &path,
            "Ticker,Shares,Avg Buy Price\nsmr,10,44.363\nTMC, 0 ,\n",
        )
        .unwrap();

        let portfolio = Portfolio::load(&path).unwrap();

        assert_eq!(
            portfolio.positions(),
            &[
                Position::new("SMR".into(), 10, Some(dec!(44.363))),
                Position::new("TMC".into(), 0, None),
            ]
        );
    }

    #[test]
    fn duplicate_tickers_are_rejected() {
        let positions = vec![
            Position::new("UEC".into(), 20, Some(dec!(9.3295))),
            Position::new("UEC".into(), 5, None),
        ];

        let err = Portfolio::new(positions).unwrap_err();

        assert!(err.to_string().contains("Duplicate ticker 'UEC'"));
    }

    #[test]
    fn bad_share_count_names_the_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.csv");
        fs::write(&path, "Ticker,Shares,Avg Buy Price\nSMR,ten,44.363\n").unwrap();

        let err = Portfolio::load(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("row 1"));
    }
}
