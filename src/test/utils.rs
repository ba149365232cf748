#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::utils::{
            accept_price_input, accept_quantity_input, accept_symbol_input, format_money,
            format_percent, normalize_symbol, parse_price, parse_quantity,
        },
        errors::PortfolioError,
    };

    #[test]
    fn normalize_symbol_works() {
        assert_eq!(normalize_symbol(" aapl "), Ok(String::from("AAPL")));
        assert_eq!(normalize_symbol("brk.b"), Ok(String::from("BRK.B")));
        assert_eq!(normalize_symbol("   "), Err(PortfolioError::EmptySymbol));
        assert_eq!(
            normalize_symbol("toolong"),
            Err(PortfolioError::InvalidSymbol(String::from("TOOLONG")))
        );
        assert!(normalize_symbol("A$PL").is_err());
    }

    #[test]
    fn parse_quantity_works() {
        assert_eq!(parse_quantity("12"), Ok(12));
        assert_eq!(parse_quantity(" 3 "), Ok(3));
        assert_eq!(parse_quantity("0"), Err(PortfolioError::InvalidQuantity));
        assert_eq!(parse_quantity("12.5"), Err(PortfolioError::InvalidQuantity));
        assert_eq!(parse_quantity("-1"), Err(PortfolioError::InvalidQuantity));
        assert_eq!(parse_quantity(""), Err(PortfolioError::InvalidQuantity));
        assert_eq!(parse_quantity("99999999999"), Err(PortfolioError::InvalidQuantity));
    }

    #[test]
    fn parse_price_works() {
        assert_eq!(parse_price("100"), Ok(dec!(100)));
        assert_eq!(parse_price("10.12"), Ok(dec!(10.12)));
        assert_eq!(parse_price(".5"), Ok(dec!(0.5)));
        assert_eq!(parse_price("10.123"), Err(PortfolioError::InvalidPurchasePrice));
        assert_eq!(parse_price("0.00"), Err(PortfolioError::InvalidPurchasePrice));
        assert_eq!(parse_price("abc"), Err(PortfolioError::InvalidPurchasePrice));
        assert_eq!(parse_price("1e3"), Err(PortfolioError::InvalidPurchasePrice));
    }

    #[test]
    fn input_filters_work() {
        assert!(accept_quantity_input(""));
        assert!(accept_quantity_input("12"));
        assert!(!accept_quantity_input("12."));

        assert!(accept_price_input(""));
        assert!(accept_price_input("10."));
        assert!(accept_price_input("10.12"));
        assert!(!accept_price_input("10.123"));
        assert!(!accept_price_input("1a"));

        assert!(accept_symbol_input("AAPL"));
        assert!(!accept_symbol_input("GOOGLE"));
        assert!(!accept_symbol_input("A B"));
    }

    #[test]
    fn format_money_works() {
        assert_eq!(format_money(Some(dec!(1234.5))), "$1,234.50");
        assert_eq!(format_money(Some(dec!(1234567.891))), "$1,234,567.89");
        assert_eq!(format_money(Some(dec!(-30))), "-$30.00");
        assert_eq!(format_money(Some(dec!(0))), "$0.00");
        assert_eq!(format_money(Some(dec!(999.999))), "$1,000.00");
        assert_eq!(format_money(None), "-");
    }

    #[test]
    fn format_percent_works() {
        assert_eq!(format_percent(Some(dec!(-7.5))), "-7.50%");
        assert_eq!(format_percent(Some(dec!(10))), "10.00%");
        assert_eq!(format_percent(None), "-");
    }
}
