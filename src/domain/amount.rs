use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// Amount is a parsed money value. Anything Decimal can hold stays exact;
// finite values beyond its range or precision are kept as f64.
#[derive(Debug, Clone, Copy)]
pub enum Amount {
    Exact(Decimal),
    Wide(f64),
}

impl Amount {
    /// Reads a numeric literal: optional sign, decimal point or exponent.
    /// Returns None for anything that is not a finite number.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
            return Some(Amount::Exact(value));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Amount::Wide(value)),
            _ => None,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Amount::Exact(value) => value.to_f64().unwrap_or(f64::NAN),
            Amount::Wide(value) => *value,
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Amount::Exact(a), Amount::Exact(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
