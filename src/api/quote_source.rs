use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Resolves a ticker symbol to its latest price.
///
/// Implementations make at most one lookup per call and never retry. Every
/// failure (transport, payload, rate limit, unknown symbol, missing
/// credentials) is reported as a plain `Err`; callers are not expected to
/// tell them apart.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn get_price(&self, symbol: &str) -> Result<Decimal>;
}
