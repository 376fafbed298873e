//! Shared converter settings
//!
//! One `Settings` value is owned by the screen host and lent to both screens.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rates::Currency;

/// Number of fractional digits shown in a conversion result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DecimalPlaces {
    Zero,
    One,
    #[default]
    Two,
    Three,
    Four,
}

impl DecimalPlaces {
    /// Every selectable option, in display order
    pub const ALL: [DecimalPlaces; 5] = [
        DecimalPlaces::Zero,
        DecimalPlaces::One,
        DecimalPlaces::Two,
        DecimalPlaces::Three,
        DecimalPlaces::Four,
    ];

    pub fn as_u8(&self) -> u8 {
        match self {
            DecimalPlaces::Zero => 0,
            DecimalPlaces::One => 1,
            DecimalPlaces::Two => 2,
            DecimalPlaces::Three => 3,
            DecimalPlaces::Four => 4,
        }
    }

    pub fn as_u32(&self) -> u32 {
        u32::from(self.as_u8())
    }

    /// Next option, wrapping from 4 back to 0
    pub fn next(&self) -> Self {
        Self::ALL[(self.as_u8() as usize + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping from 0 to 4
    pub fn previous(&self) -> Self {
        Self::ALL[(self.as_u8() as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<u8> for DecimalPlaces {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidDecimalPlaces(value))
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(places: DecimalPlaces) -> Self {
        places.as_u8()
    }
}

impl fmt::Display for DecimalPlaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Session settings shared by the converter and settings screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub default_currency: Currency,
    pub decimal_places: DecimalPlaces,
}

impl Settings {
    pub fn new(default_currency: Currency, decimal_places: DecimalPlaces) -> Self {
        Self {
            default_currency,
            decimal_places,
        }
    }

    /// Apply a change requested by the settings screen.
    ///
    /// Returns `true` when the value actually changed.
    pub fn apply(&mut self, action: SettingsAction) -> bool {
        match action {
            SettingsAction::SetDefaultCurrency(currency) => {
                let changed = self.default_currency != currency;
                self.default_currency = currency;
                changed
            }
            SettingsAction::SetDecimalPlaces(places) => {
                let changed = self.decimal_places != places;
                self.decimal_places = places;
                changed
            }
        }
    }
}

/// Change notifications sent from the settings screen to the settings owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    SetDefaultCurrency(Currency),
    SetDecimalPlaces(DecimalPlaces),
}
