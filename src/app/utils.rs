use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

use crate::{errors::PortfolioError, models::MAX_SYMBOL_LEN};

static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("quantity pattern is valid"));
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d{1,2})?|\.\d{1,2})$").expect("price pattern is valid"));
static PRICE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d{0,2}$").expect("price input pattern is valid"));

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Trims and uppercases a ticker, rejecting anything that cannot be one.
pub fn normalize_symbol(symbol: &str) -> Result<String, PortfolioError> {
    let symbol = symbol.trim().to_uppercase();

    if symbol.is_empty() {
        return Err(PortfolioError::EmptySymbol);
    }
    if symbol.chars().count() > MAX_SYMBOL_LEN || !symbol.chars().all(is_symbol_char) {
        return Err(PortfolioError::InvalidSymbol(symbol));
    }

    Ok(symbol)
}

pub fn parse_quantity(field: &str) -> Result<u32, PortfolioError> {
    let field = field.trim();
    if !QUANTITY.is_match(field) {
        return Err(PortfolioError::InvalidQuantity);
    }

    match field.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(PortfolioError::InvalidQuantity),
    }
}

pub fn parse_price(field: &str) -> Result<Decimal, PortfolioError> {
    let field = field.trim();
    if !PRICE.is_match(field) {
        return Err(PortfolioError::InvalidPurchasePrice);
    }

    let field = if field.starts_with('.') {
        format!("0{}", field)
    } else {
        field.to_string()
    };

    match Decimal::from_str(&field) {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        _ => Err(PortfolioError::InvalidPurchasePrice),
    }
}

// Keystroke filters for the add form. They decide whether a partially typed
// value may replace the current one.

pub fn accept_symbol_input(candidate: &str) -> bool {
    candidate.chars().count() <= MAX_SYMBOL_LEN && candidate.chars().all(is_symbol_char)
}

pub fn accept_quantity_input(candidate: &str) -> bool {
    candidate.is_empty() || QUANTITY.is_match(candidate)
}

pub fn accept_price_input(candidate: &str) -> bool {
    PRICE_INPUT.is_match(candidate)
}

/// Formats an amount as US dollars with thousands separators, or `-` when
/// the amount is unavailable.
pub fn format_money(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return String::from("-");
    };

    let rounded = format!("{:.2}", amount.round_dp(2).abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.round_dp(2) < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn format_percent(percent: Option<Decimal>) -> String {
    match percent {
        Some(percent) => format!("{:.2}%", percent),
        None => String::from("-"),
    }
}
