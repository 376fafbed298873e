use thiserror::Error;

/// Converter error type
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Currency code outside the supported set
    #[error("Unsupported currency code: {0} (expected USD, EUR or CNY)")]
    InvalidCurrency(String),

    /// Decimal places outside 0..=4
    #[error("Unsupported decimal places: {0} (expected 0 to 4)")]
    InvalidDecimalPlaces(u8),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
