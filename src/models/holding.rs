use chrono::{DateTime, Local};
use derive_getters::Getters;
use rust_decimal::Decimal;
use uuid::Uuid;

pub const MAX_SYMBOL_LEN: usize = 5;

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Holding {
    id: Uuid,
    symbol: String,
    quantity: u32,
    purchase_price: Decimal,
    current_price: Decimal,
    price_updated_at: DateTime<Local>,
}

impl Holding {
    /// Builds a fresh lot with a new id. Callers are expected to have
    /// validated the inputs; the symbol is normalized to uppercase here.
    pub fn new(symbol: &str, quantity: u32, purchase_price: Decimal, current_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.trim().to_uppercase(),
            quantity,
            purchase_price,
            current_price,
            price_updated_at: Local::now(),
        }
    }

    /// Returns a copy of this holding carrying a newer quote. Identity,
    /// symbol, quantity and purchase price are kept as they are.
    pub fn with_current_price(&self, current_price: Decimal) -> Self {
        Self {
            current_price,
            price_updated_at: Local::now(),
            ..self.clone()
        }
    }
}
