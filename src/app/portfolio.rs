use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::join_all;
use rust_decimal::Decimal;

use crate::{
    api::QuoteSource,
    app::{
        calc,
        utils::{normalize_symbol, parse_price, parse_quantity},
    },
    errors::PortfolioError,
    models::{Holding, PortfolioMetrics},
};

#[derive(Debug)]
struct PortfolioState {
    holdings: Arc<[Holding]>,
    // bumped on every add and every refresh start
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    Applied {
        holdings: Arc<[Holding]>,
        updated: usize,
        failed: usize,
    },
    Superseded,
}

pub struct Portfolio {
    quotes: Arc<dyn QuoteSource>,
    state: Mutex<PortfolioState>,
}

impl Portfolio {
    pub fn new(quotes: Arc<dyn QuoteSource>) -> Self {
        Self {
            quotes,
            state: Mutex::new(PortfolioState {
                holdings: Arc::from(Vec::new()),
                epoch: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, PortfolioState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn holdings(&self) -> Arc<[Holding]> {
        self.state().holdings.clone()
    }

    pub fn metrics(&self) -> PortfolioMetrics {
        calc::portfolio_metrics(&self.holdings())
    }

    pub fn epoch(&self) -> u64 {
        self.state().epoch
    }

    pub fn len(&self) -> usize {
        self.state().holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses raw form values and adds the holding. Nothing is looked up
    /// unless all three values are valid.
    pub async fn add_holding_from_input(
        &self,
        symbol: &str,
        quantity: &str,
        purchase_price: &str,
    ) -> Result<Holding, PortfolioError> {
        let symbol = normalize_symbol(symbol)?;
        let quantity = parse_quantity(quantity)?;
        let purchase_price = parse_price(purchase_price)?;

        self.add_holding(&symbol, quantity, purchase_price).await
    }

    /// Validates the lot, resolves its current price and appends it.
    ///
    /// On any failure the portfolio is left untouched. Callers should follow
    /// a successful add with [`Portfolio::refresh_prices`].
    pub async fn add_holding(
        &self,
        symbol: &str,
        quantity: u32,
        purchase_price: Decimal,
    ) -> Result<Holding, PortfolioError> {
        let symbol = normalize_symbol(symbol)?;
        if quantity == 0 {
            return Err(PortfolioError::InvalidQuantity);
        }
        if purchase_price <= Decimal::ZERO {
            return Err(PortfolioError::InvalidPurchasePrice);
        }

        let current_price = match self.quotes.get_price(&symbol).await {
            Ok(price) if price > Decimal::ZERO => price,
            Ok(price) => {
                log::warn!("Not adding {}: quote returned non-positive price {}", symbol, price);
                return Err(PortfolioError::QuoteUnavailable(symbol));
            }
            Err(e) => {
                log::warn!("Not adding {}: {:#}", symbol, e);
                return Err(PortfolioError::QuoteUnavailable(symbol));
            }
        };

        let holding = Holding::new(&symbol, quantity, purchase_price, current_price);

        let len = {
            let mut state = self.state();
            let mut holdings = state.holdings.to_vec();
            holdings.push(holding.clone());
            state.holdings = holdings.into();
            state.epoch += 1;
            state.holdings.len()
        };

        log::info!(
            "Added {} x {} @ {} (current {}), {} holdings",
            quantity,
            symbol,
            purchase_price,
            current_price,
            len
        );

        Ok(holding)
    }

    /// Re-quotes every holding concurrently and waits for all lookups.
    ///
    /// A failed lookup keeps that holding's last price. If an add or a newer
    /// refresh happened while the lookups were in flight, the results are
    /// dropped and `Superseded` is returned.
    pub async fn refresh_prices(&self) -> RefreshOutcome {
        let (epoch, snapshot) = {
            let mut state = self.state();
            state.epoch += 1;
            (state.epoch, state.holdings.clone())
        };

        log::debug!("Refreshing {} holdings (epoch {})", snapshot.len(), epoch);

        let lookups = snapshot
            .iter()
            .map(|holding| self.quotes.get_price(holding.symbol()));
        let results = join_all(lookups).await;

        let mut updated = 0;
        let mut failed = 0;
        let refreshed: Vec<Holding> = snapshot
            .iter()
            .zip(results)
            .map(|(holding, result)| match result {
                Ok(price) if price > Decimal::ZERO => {
                    updated += 1;
                    holding.with_current_price(price)
                }
                _ => {
                    failed += 1;
                    holding.clone()
                }
            })
            .collect();

        let mut state = self.state();
        if state.epoch != epoch {
            log::debug!(
                "Discarding refresh for epoch {}, portfolio is at epoch {}",
                epoch,
                state.epoch
            );
            return RefreshOutcome::Superseded;
        }

        state.holdings = refreshed.into();
        log::info!("Refreshed prices: {} updated, {} kept", updated, failed);

        RefreshOutcome::Applied {
            holdings: state.holdings.clone(),
            updated,
            failed,
        }
    }
}
