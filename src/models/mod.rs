pub mod holding;
pub mod metrics;

pub use holding::{Holding, MAX_SYMBOL_LEN};
pub use metrics::{HoldingPerformance, PnlClass, PortfolioMetrics};
