//! Amount parsing, conversion and result formatting
//!
//! Everything here is a pure function of its inputs. The converter screen
//! calls [`ConversionView::compute`] on every render instead of caching
//! derived strings.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::rates::Currency;
use crate::settings::{DecimalPlaces, Settings};

/// Message shown under the amount field for non-numeric input
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Places used for the "Rate: 1 AUD = ..." line
pub const RATE_DECIMAL_PLACES: DecimalPlaces = DecimalPlaces::Four;

/// Outcome of interpreting the free-form amount text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput {
    /// Empty or whitespace-only; no error and no result
    Blank,
    /// Non-blank text that is not a finite number
    Invalid,
    /// A finite AUD amount
    Value(f64),
}

impl AmountInput {
    /// The user-visible error, only for [`AmountInput::Invalid`]
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            AmountInput::Invalid => Some(INVALID_NUMBER_MESSAGE),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            AmountInput::Value(value) => Some(*value),
            _ => None,
        }
    }
}

/// Interpret free-form text as an AUD amount
pub fn parse_amount(text: &str) -> AmountInput {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return AmountInput::Blank;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => AmountInput::Value(value),
        _ => AmountInput::Invalid,
    }
}

/// Convert an AUD amount into the target currency
pub fn convert(amount: f64, currency: Currency) -> f64 {
    amount * currency.rate()
}

/// Format `value` with exactly `places` fractional digits.
///
/// Rounds half away from zero on the shortest decimal form of the float, so
/// `1.005` becomes `"1.01"` at two places. Negative values keep their sign
/// even when they round to zero (`-0.001` gives `"-0.00"`).
pub fn format_fixed(value: f64, places: DecimalPlaces) -> String {
    let dp = places.as_u32();
    let formatted = match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let rounded = decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            // Decimal's precision formatting overflows its buffer near 28 digits
            pad_fraction(rounded.to_string(), dp as usize)
        }
        // Out of Decimal range
        Err(_) => format!("{:.prec$}", value, prec = dp as usize),
    };

    if value.is_sign_negative() && !formatted.starts_with('-') {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Right-pad the fractional part of a plain decimal string with zeros
fn pad_fraction(mut digits: String, places: usize) -> String {
    if places == 0 {
        return digits;
    }
    let present = match digits.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => {
            digits.push('.');
            0
        }
    };
    digits.extend(std::iter::repeat('0').take(places.saturating_sub(present)));
    digits
}

/// Everything the converter screen displays that derives from its inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionView {
    pub currency: Currency,
    /// "Rate: 1 AUD = 0.6600 USD"
    pub rate_line: String,
    /// Shown under the amount field
    pub error: Option<&'static str>,
    /// Formatted converted amount without the currency code
    pub result: Option<String>,
}

impl ConversionView {
    pub fn compute(input: &str, currency: Currency, places: DecimalPlaces) -> Self {
        let amount = parse_amount(input);
        let rate_line = format!(
            "Rate: 1 AUD = {} {}",
            format_fixed(currency.rate(), RATE_DECIMAL_PLACES),
            currency.code()
        );
        let result = amount
            .value()
            .map(|value| format_fixed(convert(value, currency), places));

        Self {
            currency,
            rate_line,
            error: amount.error_message(),
            result,
        }
    }

    /// Same as [`ConversionView::compute`] using the decimal places from `settings`
    pub fn for_settings(input: &str, currency: Currency, settings: &Settings) -> Self {
        Self::compute(input, currency, settings.decimal_places)
    }

    /// "Result: USD 66.00", present only when the input parsed
    pub fn result_line(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|result| format!("Result: {} {}", self.currency.code(), result))
    }
}
