use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Holding, HoldingPerformance, PnlClass, PortfolioMetrics};

// Every product below uses checked arithmetic. An overflowing entry is the
// Decimal counterpart of a non-finite float: it is skipped in sums and turns
// per-row figures into `None`.

fn checked_sum<F>(holdings: &[Holding], price: F) -> Decimal
where
    F: Fn(&Holding) -> Decimal,
{
    holdings.iter().fold(Decimal::ZERO, |sum, holding| {
        Decimal::from(*holding.quantity())
            .checked_mul(price(holding))
            .and_then(|amount| sum.checked_add(amount))
            .unwrap_or(sum)
    })
}

pub fn total_invested(holdings: &[Holding]) -> Decimal {
    checked_sum(holdings, |h| *h.purchase_price())
}

pub fn total_value(holdings: &[Holding]) -> Decimal {
    checked_sum(holdings, |h| *h.current_price())
}

pub fn profit_loss(holdings: &[Holding]) -> Decimal {
    total_value(holdings) - total_invested(holdings)
}

/// Return on the invested amount in percent, or zero when nothing is
/// invested.
pub fn performance_percent(holdings: &[Holding]) -> Decimal {
    percent_of(profit_loss(holdings), total_invested(holdings))
}

fn percent_of(profit_loss: Decimal, invested: Decimal) -> Decimal {
    if invested <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    profit_loss
        .checked_div(invested)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

pub fn portfolio_metrics(holdings: &[Holding]) -> PortfolioMetrics {
    let total_invested = total_invested(holdings);
    let total_value = total_value(holdings);
    let profit_loss = total_value - total_invested;

    PortfolioMetrics::new(
        total_value,
        total_invested,
        profit_loss,
        percent_of(profit_loss, total_invested),
    )
}

pub fn holding_profit_loss(holding: &Holding) -> Option<Decimal> {
    holding
        .current_price()
        .checked_sub(*holding.purchase_price())?
        .checked_mul(Decimal::from(*holding.quantity()))
}

pub fn holding_return_percent(holding: &Holding) -> Option<Decimal> {
    let purchase_price = *holding.purchase_price();
    if purchase_price.is_zero() {
        return None;
    }

    holding
        .current_price()
        .checked_sub(purchase_price)?
        .checked_div(purchase_price)?
        .checked_mul(dec!(100))
}

pub fn holding_performance(holding: &Holding) -> HoldingPerformance {
    HoldingPerformance::new(holding_profit_loss(holding), holding_return_percent(holding))
}

pub fn pnl_class(value: Decimal) -> PnlClass {
    if value >= Decimal::ZERO {
        PnlClass::Positive
    } else {
        PnlClass::Negative
    }
}
