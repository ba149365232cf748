use derive_getters::Getters;
use serde::Deserialize;

/// Top-level keys Alpha Vantage uses for rate-limit notices and rejected
/// requests. Their presence invalidates the whole payload.
pub const SOFT_ERROR_MARKERS: [&str; 4] = ["Note", "Information", "Error Message", "Error_Message"];

#[derive(Debug, Deserialize, Getters)]
pub struct AvGlobalQuoteDto {
    #[serde(rename = "05. price")]
    price: String,
}
