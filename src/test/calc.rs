#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::calc::{pl_percent, round_percent, round_price};

    #[test]
    fn pl_percent_against_avg_buy_price() {
        assert_eq!(pl_percent(dec!(50), Some(dec!(40))), Some(dec!(25.00)));
        assert_eq!(pl_percent(dec!(30), Some(dec!(40))), Some(dec!(-25.00)));
        assert_eq!(
            pl_percent(dec!(47.12), Some(dec!(44.363))),
            Some(dec!(6.21))
        );
    }

    #[test]
    fn pl_percent_absent_without_cost_basis() {
        assert_eq!(pl_percent(dec!(12.5), None), None);
        assert_eq!(pl_percent(dec!(12.5), Some(dec!(0))), None);
        assert_eq!(pl_percent(dec!(12.5), Some(dec!(0.0000))), None);
    }

    #[test]
    fn rounds_prices_to_four_and_percent_to_two_places() {
        assert_eq!(round_price(dec!(9.320857)), dec!(9.3209));
        assert_eq!(round_price(dec!(1.23445)), dec!(1.2345));
        assert_eq!(round_price(dec!(7.5)), dec!(7.5));
        assert_eq!(round_percent(dec!(3.14159)), dec!(3.14));
        assert_eq!(round_percent(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn rounded_values_drop_trailing_zeros() {
        assert_eq!(round_price(dec!(47.119998931884766)).to_string(), "47.12");
        assert_eq!(round_price(dec!(12.00001)).to_string(), "12");
        assert_eq!(round_percent(dec!(25.0000)).to_string(), "25");
        assert_eq!(
            pl_percent(dec!(47.119998931884766), Some(dec!(44.363)))
                .unwrap()
                .to_string(),
            "6.21"
        );
    }
}
