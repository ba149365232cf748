#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::calc::{
            holding_performance, holding_profit_loss, holding_return_percent, performance_percent,
            pnl_class, portfolio_metrics, profit_loss, total_invested, total_value,
        },
        models::{Holding, PnlClass},
    };

    fn set_sample_data() -> Vec<Holding> {
        vec![
            Holding::new("AAPL", 2, dec!(100), dec!(110)),
            Holding::new("MSFT", 1, dec!(200), dec!(150)),
        ]
    }

    #[test]
    fn single_holding_in_profit() {
        let holdings = vec![Holding::new("AAPL", 2, dec!(100), dec!(110))];
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(*metrics.total_invested(), dec!(200));
        assert_eq!(*metrics.total_value(), dec!(220));
        assert_eq!(*metrics.profit_loss(), dec!(20));
        assert_eq!(metrics.performance_percent().round_dp(2), dec!(10.00));
    }

    #[test]
    fn mixed_holdings_in_loss() {
        let holdings = set_sample_data();
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(*metrics.total_invested(), dec!(400));
        assert_eq!(*metrics.total_value(), dec!(370));
        assert_eq!(*metrics.profit_loss(), dec!(-30));
        assert_eq!(metrics.performance_percent().round_dp(2), dec!(-7.50));
    }

    #[test]
    fn profit_loss_is_value_minus_invested() {
        let holdings = set_sample_data();

        assert_eq!(
            total_value(&holdings) - total_invested(&holdings),
            profit_loss(&holdings)
        );
        assert_eq!(performance_percent(&holdings), *portfolio_metrics(&holdings).performance_percent());
    }

    #[test]
    fn empty_portfolio_has_zero_metrics() {
        let metrics = portfolio_metrics(&[]);

        assert_eq!(*metrics.total_invested(), Decimal::ZERO);
        assert_eq!(*metrics.total_value(), Decimal::ZERO);
        assert_eq!(*metrics.profit_loss(), Decimal::ZERO);
        assert_eq!(*metrics.performance_percent(), Decimal::ZERO);
    }

    #[test]
    fn performance_is_zero_without_investment() {
        let holdings = vec![Holding::new("FREE", 3, Decimal::ZERO, dec!(12.5))];

        assert_eq!(total_value(&holdings), dec!(37.5));
        assert_eq!(performance_percent(&holdings), Decimal::ZERO);
    }

    #[test]
    fn per_holding_figures() {
        let holdings = set_sample_data();

        assert_eq!(holding_profit_loss(&holdings[0]), Some(dec!(20)));
        assert_eq!(holding_return_percent(&holdings[0]), Some(dec!(10)));
        assert_eq!(holding_profit_loss(&holdings[1]), Some(dec!(-50)));
        assert_eq!(holding_return_percent(&holdings[1]), Some(dec!(-25)));
    }

    #[test]
    fn overflowing_holding_is_unavailable_and_skipped() {
        let big = Holding::new("BIG", 2, dec!(1), Decimal::MAX);
        let normal = Holding::new("AAPL", 2, dec!(100), dec!(110));
        let holdings = vec![big.clone(), normal.clone()];

        assert_eq!(holding_profit_loss(&big), None);
        assert_eq!(*holding_performance(&big).profit_loss(), None);
        assert_eq!(holding_profit_loss(&normal), Some(dec!(20)));

        // The overflowing market value is left out, its cost is not.
        assert_eq!(total_value(&holdings), dec!(220));
        assert_eq!(total_invested(&holdings), dec!(202));
    }

    #[test]
    fn return_percent_needs_a_purchase_price() {
        let holding = Holding::new("GIFT", 1, Decimal::ZERO, dec!(5));

        assert_eq!(holding_return_percent(&holding), None);
        assert_eq!(holding_profit_loss(&holding), Some(dec!(5)));
    }

    #[test]
    fn valuation_is_idempotent() {
        let holdings = set_sample_data();

        assert_eq!(portfolio_metrics(&holdings), portfolio_metrics(&holdings));
        assert_eq!(
            holding_performance(&holdings[1]),
            holding_performance(&holdings[1])
        );
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(pnl_class(Decimal::ZERO), PnlClass::Positive);
        assert_eq!(pnl_class(dec!(0.01)), PnlClass::Positive);
        assert_eq!(pnl_class(dec!(-0.01)), PnlClass::Negative);
        assert_eq!(PnlClass::Negative.to_string(), "pnl-negative");
        assert_eq!(PnlClass::Positive.as_ref(), "pnl-positive");
    }
}
