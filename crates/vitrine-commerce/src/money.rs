//! Money type for listing prices.
//!
//! Amounts are kept exactly as the catalog stores them (whole currency units
//! for the storefront markets) and price modifiers are added as signed
//! integers, so no rounding ever happens inside the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported storefront currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    ARS,
    BRL,
    CLP,
    COP,
    MXN,
    PEN,
    UYU,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "ARS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::BRL => "BRL",
            Currency::CLP => "CLP",
            Currency::COP => "COP",
            Currency::MXN => "MXN",
            Currency::PEN => "PEN",
            Currency::UYU => "UYU",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol as shown on listings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::PEN => "S/",
            Currency::USD => "US$",
            Currency::ARS | Currency::CLP | Currency::COP | Currency::MXN | Currency::UYU => "$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ARS" => Some(Currency::ARS),
            "BRL" => Some(Currency::BRL),
            "CLP" => Some(Currency::CLP),
            "COP" => Some(Currency::COP),
            "MXN" => Some(Currency::MXN),
            "PEN" => Some(Currency::PEN),
            "UYU" => Some(Currency::UYU),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount as stored by the catalog.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add a signed modifier, saturating at the `i64` bounds.
    pub fn with_modifier(&self, modifier: i64) -> Money {
        Money::new(self.amount.saturating_add(modifier), self.currency)
    }

    /// Try to subtract another Money value, returning None if currencies don't match.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_sub(other.amount),
            self.currency,
        ))
    }

    /// Format as a display string (e.g., "$ 1.299.999").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}",
            sign,
            self.currency.symbol(),
            group_thousands(self.amount.unsigned_abs())
        )
    }
}

/// Group digits with `.` the way the storefront markets print prices.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1_299_999, Currency::ARS).display(), "$ 1.299.999");
        assert_eq!(Money::new(999, Currency::BRL).display(), "R$ 999");
        assert_eq!(Money::new(1000, Currency::USD).display(), "US$ 1.000");
        assert_eq!(Money::zero(Currency::ARS).display(), "$ 0");
    }

    #[test]
    fn test_negative_display() {
        let m = Money::new(-49_000, Currency::ARS);
        assert!(m.is_negative());
        assert_eq!(m.to_string(), "-$ 49.000");
    }

    #[test]
    fn test_with_modifier() {
        let base = Money::new(1000, Currency::ARS);
        assert_eq!(base.with_modifier(-50_000).amount, -49_000);
        assert_eq!(base.with_modifier(0), base);
        assert_eq!(Money::new(i64::MAX, Currency::ARS).with_modifier(1).amount, i64::MAX);
    }

    #[test]
    fn test_try_subtract() {
        let a = Money::new(1500, Currency::ARS);
        let b = Money::new(1000, Currency::ARS);
        assert_eq!(a.try_subtract(&b), Some(Money::new(500, Currency::ARS)));
        assert_eq!(a.try_subtract(&Money::new(1, Currency::USD)), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("ARS"), Some(Currency::ARS));
        assert_eq!(Currency::from_code("mxn"), Some(Currency::MXN));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
