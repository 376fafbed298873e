use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::rates::Currency;
use crate::settings::{DecimalPlaces, Settings};

/// Prefix for environment overrides, e.g. `CURRENCY_CONVERTER_DEFAULT_CURRENCY`
pub const ENV_PREFIX: &str = "CURRENCY_CONVERTER";

/// Startup configuration for the converter
///
/// Only read at startup. Changes made on the settings screen are never
/// written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target currency selected when the converter opens
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Fractional digits in the conversion result (0-4)
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_decimal_places() -> u8 {
    DecimalPlaces::default().as_u8()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// A missing file at the default location is not an error; an explicitly
    /// requested file that does not exist is.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = ConfigLoader::builder()
            .set_default("default_currency", default_currency())?
            .set_default("decimal_places", i64::from(default_decimal_places()))?;

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                let default_path = Self::default_path();
                builder = builder.add_source(
                    File::from(default_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize::<AppConfig>()?)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read configuration from a TOML file without environment overrides
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, currency: Option<String>, decimal_places: Option<u8>) -> Self {
        if let Some(currency) = currency {
            self.default_currency = currency;
        }
        if let Some(decimal_places) = decimal_places {
            self.decimal_places = decimal_places;
        }
        self
    }

    /// Validate into the typed session settings
    pub fn to_settings(&self) -> Result<Settings, Error> {
        let default_currency = self.default_currency.parse::<Currency>()?;
        let decimal_places = DecimalPlaces::try_from(self.decimal_places)?;
        Ok(Settings::new(default_currency, decimal_places))
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("currency-converter");
        path.push("config.toml");
        path
    }
}
