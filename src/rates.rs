//! Fixed AUD exchange rates
//!
//! Rates are "units of target currency per 1 AUD" and never change while
//! the process is running.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target currencies supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Cny,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Cny];

    /// ISO code shown to the user
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cny => "CNY",
        }
    }

    /// Units of this currency per 1 AUD
    pub fn rate(&self) -> f64 {
        RateTable::STANDARD.rate(*self)
    }

    /// Position of this currency in [`Currency::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Currency::Usd => 0,
            Currency::Eur => 1,
            Currency::Cny => 2,
        }
    }

    /// Next currency in display order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous currency in display order, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::InvalidCurrency(code.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Ordered mapping from currency to its AUD multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    entries: [(Currency, f64); 3],
}

impl RateTable {
    /// The hardcoded rates the converter ships with
    pub const STANDARD: RateTable = RateTable {
        entries: [
            (Currency::Usd, 0.66),
            (Currency::Eur, 0.61),
            (Currency::Cny, 4.75),
        ],
    };

    /// Multiplier for a supported currency
    pub fn rate(&self, currency: Currency) -> f64 {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == currency)
            .map(|(_, rate)| *rate)
            .unwrap_or(1.0)
    }

    /// Multiplier for a raw currency code.
    ///
    /// Unknown codes fall back to an identity rate of 1.0 instead of failing.
    pub fn rate_for_code(&self, code: &str) -> f64 {
        self.entries
            .iter()
            .find(|(currency, _)| currency.code() == code)
            .map(|(_, rate)| *rate)
            .unwrap_or(1.0)
    }

    /// Iterate over `(currency, rate)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Look up the standard rate for a raw currency code, 1.0 when unknown
pub fn rate_for_code(code: &str) -> f64 {
    RateTable::STANDARD.rate_for_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        assert_eq!(Currency::Usd.rate(), 0.66);
        assert_eq!(Currency::Eur.rate(), 0.61);
        assert_eq!(Currency::Cny.rate(), 4.75);
    }

    #[test]
    fn test_rate_for_code() {
        assert_eq!(rate_for_code("USD"), 0.66);
        assert_eq!(rate_for_code("EUR"), 0.61);
        assert_eq!(rate_for_code("CNY"), 4.75);

        // Unknown codes fall back to identity
        assert_eq!(rate_for_code("GBP"), 1.0);
        assert_eq!(rate_for_code(""), 1.0);
        assert_eq!(rate_for_code("usd"), 1.0);
    }

    #[test]
    fn test_table_order_matches_currency_order() {
        let codes: Vec<&str> = RateTable::STANDARD.iter().map(|(c, _)| c.code()).collect();
        assert_eq!(codes, vec!["USD", "EUR", "CNY"]);
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" eur ".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("Cny".parse::<Currency>().unwrap(), Currency::Cny);

        let err = "JPY".parse::<Currency>().unwrap_err();
        assert!(matches!(err, Error::InvalidCurrency(code) if code == "JPY"));
    }

    #[test]
    fn test_currency_cycling() {
        assert_eq!(Currency::Usd.next(), Currency::Eur);
        assert_eq!(Currency::Cny.next(), Currency::Usd);
        assert_eq!(Currency::Usd.previous(), Currency::Cny);
        assert_eq!(Currency::Eur.previous(), Currency::Usd);
    }
}
