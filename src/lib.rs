pub mod config;
pub mod conversion;
pub mod error;
pub mod rates;
pub mod settings;

// TUI module - optional via "tui" feature
#[cfg(feature = "tui")]
pub mod tui;

pub use config::AppConfig;
pub use conversion::{
    convert, format_fixed, parse_amount, AmountInput, ConversionView, INVALID_NUMBER_MESSAGE,
};
pub use error::{Error, Result};
pub use rates::{rate_for_code, Currency, RateTable};
pub use settings::{DecimalPlaces, Settings, SettingsAction};

// Re-export TUI entry point when feature is enabled
#[cfg(feature = "tui")]
pub use tui::run_tui;
