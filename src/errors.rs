use thiserror::Error;

/// Reasons an add is rejected.
///
/// Everything except `QuoteUnavailable` is raised before the quote service is
/// contacted. Quote failures are not broken down any further.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PortfolioError {
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("Invalid symbol '{0}': expected up to 5 letters, digits, '.' or '-'")]
    InvalidSymbol(String),

    #[error("Quantity must be a positive whole number")]
    InvalidQuantity,

    #[error("Purchase price must be a positive amount")]
    InvalidPurchasePrice,

    #[error("Invalid stock symbol or API temporarily unavailable (rate limit)")]
    QuoteUnavailable(String),
}
