use derive_getters::Getters;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::app::utils::{accept_price_input, accept_quantity_input, accept_symbol_input};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill up all the fields.";

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum FormField {
    #[default]
    #[strum(serialize = "Symbol")]
    Symbol,
    #[strum(serialize = "Quantity")]
    Quantity,
    #[strum(serialize = "Purchase Price")]
    PurchasePrice,
}

impl FormField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Symbol => "e.g., AAPL",
            FormField::Quantity => "0",
            FormField::PurchasePrice => "$ 0.00",
        }
    }
}

/// State of the add-holding popup. Keystrokes that would make a field
/// invalid are dropped, so the previous value stays in place.
#[derive(Clone, Debug, Default, Getters)]
pub struct AddHoldingForm {
    symbol: String,
    quantity: String,
    purchase_price: String,
    focus: FormField,
    error: Option<String>,
}

impl AddHoldingForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Symbol => &self.symbol,
            FormField::Quantity => &self.quantity,
            FormField::PurchasePrice => &self.purchase_price,
        }
    }

    pub fn next_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + 1) % fields.len()];
    }

    pub fn previous_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + fields.len() - 1) % fields.len()];
    }

    pub fn push_char(&mut self, c: char) {
        let mut candidate = self.value(self.focus).to_string();
        candidate.push(c);
        self.set_value(self.focus, &candidate);
    }

    pub fn pop_char(&mut self) {
        let mut candidate = self.value(self.focus).to_string();
        candidate.pop();
        self.set_value(self.focus, &candidate);
    }

    /// Replaces a field's value if the new text passes that field's filter.
    /// Returns whether the value was taken.
    pub fn set_value(&mut self, field: FormField, candidate: &str) -> bool {
        match field {
            FormField::Symbol => {
                let candidate = candidate.to_uppercase();
                if !accept_symbol_input(&candidate) {
                    return false;
                }
                self.symbol = candidate;
            }
            FormField::Quantity => {
                if !accept_quantity_input(candidate) {
                    return false;
                }
                self.quantity = candidate.to_string();
            }
            FormField::PurchasePrice => {
                if !accept_price_input(candidate) {
                    return false;
                }
                self.purchase_price = candidate.to_string();
            }
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        FormField::iter().all(|field| !self.value(field).trim().is_empty())
    }

    /// Returns the submitted values, or records the missing-fields message.
    pub fn submission(&mut self) -> Option<(String, String, String)> {
        if !self.is_complete() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        Some((
            self.symbol.clone(),
            self.quantity.clone(),
            self.purchase_price.clone(),
        ))
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
