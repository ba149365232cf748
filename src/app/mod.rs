pub mod app;
pub mod calc;
pub mod form;
pub mod portfolio;
pub mod ui;
pub mod utils;

pub use app::{App, PortfolioEvent};
pub use form::{AddHoldingForm, FormField};
pub use portfolio::{Portfolio, RefreshOutcome};
