use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use derive_getters::Getters;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use crate::{
    app::{AddHoldingForm, Portfolio, RefreshOutcome, calc, ui},
    errors::PortfolioError,
    models::Holding,
};

const TICK: Duration = Duration::from_millis(100);

/// Results reported back by background add/refresh tasks.
#[derive(Debug)]
pub enum PortfolioEvent {
    Added(Holding),
    AddFailed(PortfolioError),
    Refreshed(RefreshOutcome),
}

#[derive(Getters)]
pub struct App {
    #[getter(skip)]
    portfolio: Arc<Portfolio>,
    #[getter(skip)]
    table_state: TableState,
    form: Option<AddHoldingForm>,
    popup_message: Option<String>,
    error_popup: Option<String>,
    status: String,
    refreshes_in_flight: usize,
    #[getter(skip)]
    events_tx: UnboundedSender<PortfolioEvent>,
    #[getter(skip)]
    events_rx: UnboundedReceiver<PortfolioEvent>,
}

impl App {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            portfolio,
            table_state: TableState::default(),
            form: None,
            popup_message: None,
            error_popup: None,
            status: String::from("Add stocks to your portfolio with 'a'."),
            refreshes_in_flight: 0,
            events_tx,
            events_rx,
        }
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.drain_events();

            let holdings = self.portfolio.holdings();
            let metrics = calc::portfolio_metrics(&holdings);
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &holdings,
                    &metrics,
                    &mut self.table_state,
                    self.form.as_ref(),
                    &self.popup_message,
                    &self.error_popup,
                    &self.status,
                )
            })?;

            if !event::poll(TICK)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if !self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    /// Applies one key press. Returns `false` once the user asks to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error_popup();
            }
            return true;
        }

        if self.form.is_some() {
            self.handle_form_key(key);
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('a') => {
                self.table_state.select(None);
                self.form = Some(AddHoldingForm::default());
            }
            KeyCode::F(5) => {
                self.table_state.select(None);
                self.spawn_refresh();
            }
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down => self.select_row(1),
            KeyCode::Up => self.select_row(-1),
            _ => {}
        }
        true
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.popup_message.is_some() {
            // add in flight
            if key.code == KeyCode::Esc {
                self.clear_popup();
                self.form = None;
            }
            return;
        }

        let Some(form) = self.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            KeyCode::Enter => {
                if let Some((symbol, quantity, purchase_price)) = form.submission() {
                    self.spawn_add(symbol, quantity, purchase_price);
                }
            }
            _ => {}
        }
    }

    fn select_row(&mut self, step: isize) {
        let len = self.portfolio.len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn spawn_add(&mut self, symbol: String, quantity: String, purchase_price: String) {
        self.show_popup(&format!("Looking up {}...", symbol));

        let portfolio = Arc::clone(&self.portfolio);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match portfolio
                .add_holding_from_input(&symbol, &quantity, &purchase_price)
                .await
            {
                Ok(holding) => PortfolioEvent::Added(holding),
                Err(e) => PortfolioEvent::AddFailed(e),
            };
            let _ = tx.send(event);
        });
    }

    fn spawn_refresh(&mut self) {
        self.refreshes_in_flight += 1;
        self.status = String::from("Updating prices...");

        let portfolio = Arc::clone(&self.portfolio);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = portfolio.refresh_prices().await;
            let _ = tx.send(PortfolioEvent::Refreshed(outcome));
        });
    }

    fn drain_events(&mut self) {
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn handle_event(&mut self, event: PortfolioEvent) {
        match event {
            PortfolioEvent::Added(holding) => {
                self.clear_popup();
                if let Some(form) = self.form.as_mut() {
                    form.reset();
                }
                self.status = format!(
                    "Added {} x {} at {:.2}",
                    holding.quantity(),
                    holding.symbol(),
                    holding.purchase_price()
                );
                self.spawn_refresh();
            }
            PortfolioEvent::AddFailed(e) => {
                self.clear_popup();
                match self.form.as_mut() {
                    Some(form) => form.set_error(&e.to_string()),
                    None => self.show_error_popup(&e.to_string()),
                }
            }
            PortfolioEvent::Refreshed(outcome) => {
                self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
                if let RefreshOutcome::Applied {
                    updated, failed, ..
                } = outcome
                {
                    self.status = if failed == 0 {
                        format!("Prices refreshed: {} updated", updated)
                    } else {
                        format!(
                            "Prices refreshed: {} updated, {} kept their last price",
                            updated, failed
                        )
                    };
                } else if self.refreshes_in_flight == 0 {
                    self.status = String::from("Price refresh superseded");
                }
            }
        }
    }
}
