//! Currency Converter - Terminal User Interface
//!
//! Converts AUD into USD, EUR or CNY. Runs the interactive TUI by default,
//! or a single conversion with `--convert`.

use anyhow::Context;
use clap::Parser;
use currency_converter::{
    config::AppConfig, conversion::ConversionView, run_tui, settings::Settings,
    tui::utils::logger::init_file_logger,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "currency-converter")]
#[command(about = "Convert Australian dollars into USD, EUR or CNY")]
#[command(version)]
struct Args {
    /// Default target currency (USD, EUR, CNY)
    #[arg(long)]
    currency: Option<String>,

    /// Decimal places shown in the result (0-4)
    #[arg(long)]
    decimal_places: Option<u8>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the log file (default: ~/.currency-converter/tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Convert a single AUD amount and print the result instead of starting the TUI
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    convert: Option<String>,
}

fn resolve_settings(args: &Args) -> anyhow::Result<Settings> {
    let config = AppConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.currency.clone(), args.decimal_places);

    let settings = config.to_settings().context("Invalid settings")?;
    tracing::debug!(?settings, "settings resolved");
    Ok(settings)
}

/// Print a one-shot conversion; returns false when the amount was rejected
fn convert_once(amount: &str, settings: &Settings) -> bool {
    let view = ConversionView::for_settings(amount, settings.default_currency, settings);
    println!("{}", view.rate_line);

    if let Some(error) = view.error {
        eprintln!("{}", error);
        return false;
    }
    if let Some(result_line) = view.result_line() {
        println!("{}", result_line);
    }
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match init_file_logger(args.log_file.clone(), args.debug) {
        Ok(path) => tracing::debug!("logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let settings = resolve_settings(&args)?;

    if let Some(amount) = &args.convert {
        if !convert_once(amount, &settings) {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = run_tui(settings).await {
        tracing::error!("TUI error: {}", e);
        eprintln!("TUI Application Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
