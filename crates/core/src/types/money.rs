//! Type-safe price representation.
//!
//! Catalog prices are whole amounts in the store currency's major unit
//! (6500 means ₦6,500) - there are no fractional prices anywhere in the
//! product data, so [`Price`] wraps an unsigned integer rather than a
//! decimal type.

use serde::{Deserialize, Serialize};

/// A product price as a whole currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// The line total for this price at the given quantity.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> u64 {
        self.0 * quantity as u64
    }

    /// Format for display in the given currency (e.g. "₦6,500").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format_amount(self.0, currency)
    }
}

/// ISO 4217 currency codes supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Ngn,
    Kes,
    Usd,
    Eur,
    Gbp,
}

impl CurrencyCode {
    /// The ISO 4217 code (e.g. "NGN").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ngn => "NGN",
            Self::Kes => "KES",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    /// The display symbol (e.g. "₦").
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ngn => "₦",
            Self::Kes => "KSh ",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NGN" => Ok(Self::Ngn),
            "KES" => Ok(Self::Kes),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("unsupported currency code: {s}")),
        }
    }
}

/// Format a raw amount as a price string with thousands separators.
#[must_use]
pub fn format_amount(amount: u64, currency: CurrencyCode) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{grouped}", currency.symbol())
}
