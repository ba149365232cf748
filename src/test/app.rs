#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent};
    use rust_decimal_macros::dec;

    use crate::{
        app::{App, Portfolio, PortfolioEvent},
        errors::PortfolioError,
        test::mock::{MockQuotes, wait_for_calls},
    };

    fn set_sample_data() -> (Arc<MockQuotes>, Arc<Portfolio>) {
        let mock = Arc::new(MockQuotes::with_prices(&[("AAPL", dec!(110))]));
        let portfolio = Arc::new(Portfolio::new(mock.clone()));
        (mock, portfolio)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::from(code))
    }

    fn type_into(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn added_holding_triggers_one_refresh() {
        let (mock, portfolio) = set_sample_data();
        let holding = portfolio.add_holding("AAPL", 2, dec!(100)).await.unwrap();
        let mut app = App::new(Arc::clone(&portfolio));

        app.handle_event(PortfolioEvent::Added(holding));
        assert_eq!(*app.refreshes_in_flight(), 1);

        wait_for_calls(&mock, 2).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(mock.calls(), 2);
        assert_eq!(*app.refreshes_in_flight(), 1);
    }

    #[tokio::test]
    async fn failed_add_does_not_refresh() {
        let (mock, portfolio) = set_sample_data();
        let mut app = App::new(portfolio);

        app.handle_event(PortfolioEvent::AddFailed(PortfolioError::QuoteUnavailable(
            String::from("ZZZZ"),
        )));
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(*app.refreshes_in_flight(), 0);
        assert_eq!(mock.calls(), 0);
        assert_eq!(
            app.error_popup().as_deref(),
            Some("Invalid stock symbol or API temporarily unavailable (rate limit)")
        );
    }

    #[tokio::test]
    async fn successful_add_clears_form_for_next_entry() {
        let (_mock, portfolio) = set_sample_data();
        let holding = portfolio.add_holding("AAPL", 2, dec!(100)).await.unwrap();
        let mut app = App::new(Arc::clone(&portfolio));

        press(&mut app, KeyCode::Char('a'));
        type_into(&mut app, "aapl");
        app.handle_event(PortfolioEvent::Added(holding));

        let form = app.form().as_ref().unwrap();
        assert_eq!(form.symbol(), "");
        assert!(!form.is_complete());
    }

    #[tokio::test]
    async fn closing_form_during_add_clears_popup() {
        let (mock, portfolio) = set_sample_data();
        let gate = mock.gate("AAPL");
        let mut app = App::new(portfolio);

        press(&mut app, KeyCode::Char('a'));
        type_into(&mut app, "aapl");
        press(&mut app, KeyCode::Tab);
        type_into(&mut app, "2");
        press(&mut app, KeyCode::Tab);
        type_into(&mut app, "100");
        press(&mut app, KeyCode::Enter);
        assert!(app.popup_message().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.form().is_none());
        assert!(app.popup_message().is_none());

        // A reopened form accepts input again.
        press(&mut app, KeyCode::Char('a'));
        type_into(&mut app, "m");
        assert_eq!(app.form().as_ref().unwrap().symbol(), "M");

        gate.notify_one();
    }

    #[tokio::test]
    async fn q_quits_outside_the_form() {
        let (_mock, portfolio) = set_sample_data();
        let mut app = App::new(portfolio);

        press(&mut app, KeyCode::Char('a'));
        assert!(press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Esc);
        assert!(!press(&mut app, KeyCode::Char('q')));
    }
}
