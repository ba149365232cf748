use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{AsRefStr, Display};

#[derive(Clone, Copy, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct PortfolioMetrics {
    total_value: Decimal,
    total_invested: Decimal,
    profit_loss: Decimal,
    performance_percent: Decimal,
}

/// Per-row figures. `None` means the value could not be computed and must be
/// shown as a placeholder rather than as zero.
#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingPerformance {
    profit_loss: Option<Decimal>,
    return_percent: Option<Decimal>,
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum PnlClass {
    #[strum(serialize = "pnl-positive")]
    Positive,
    #[strum(serialize = "pnl-negative")]
    Negative,
}
