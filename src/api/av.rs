use std::str::FromStr;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;

use super::{
    QuoteSource,
    av_dto::{AvGlobalQuoteDto, SOFT_ERROR_MARKERS},
    utils::{make_request, parse_response_object},
};
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AvApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AvApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(*config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(
            client,
            config.base_url().clone(),
            config.api_key().clone(),
        ))
    }

    pub fn with_client(client: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_price(&self, symbol: &str, api_key: &str) -> Result<Decimal> {
        let params = [
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", api_key),
        ];
        let res = make_request(&self.client, &self.base_url, "query", &params)
            .await
            .with_context(|| format!("Alpha Vantage ({})", symbol))?;

        extract_price(res, symbol)
    }
}

#[async_trait]
impl QuoteSource for AvApi {
    async fn get_price(&self, symbol: &str) -> Result<Decimal> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            bail!("Cannot look up an empty symbol");
        }

        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!(
                "No Alpha Vantage API key configured, skipping quote lookup for {}",
                symbol
            );
            bail!("Missing Alpha Vantage API key");
        };

        log::debug!("Requesting GLOBAL_QUOTE for {}", symbol);
        let result = self.fetch_price(&symbol, api_key).await;

        match &result {
            Ok(price) => log::debug!("Quote for {}: {}", symbol, price),
            Err(e) => log::warn!("Quote lookup failed for {}: {:#}", symbol, e),
        }

        result
    }
}

/// Pulls a usable price out of a `GLOBAL_QUOTE` payload.
///
/// Any soft error marker rejects the payload even when a price is present.
pub fn extract_price(data: Value, symbol: &str) -> Result<Decimal> {
    if let Some(marker) = SOFT_ERROR_MARKERS.iter().find(|m| data.get(**m).is_some()) {
        bail!("Alpha Vantage ({}): response carries '{}'", symbol, marker);
    }

    let global_quote = data
        .get("Global Quote")
        .with_context(|| format!("Alpha Vantage ({}): 'Global Quote' missing", symbol))?;

    let dto = parse_response_object::<AvGlobalQuoteDto>(
        global_quote.clone(),
        &format!("No results for symbol {}", symbol),
    )?;

    let price = Decimal::from_str(dto.price().trim())
        .with_context(|| format!("Alpha Vantage ({}): Failed to parse price", symbol))?;

    if price <= Decimal::ZERO {
        bail!("Alpha Vantage ({}): non-positive price {}", symbol, price);
    }

    Ok(price)
}
