//! bsm - Black-Scholes-Merton pricing from the command line
//!
//! Operational entry point for the closed-form European option pricer.
//!
//! # Commands
//!
//! - `bsm price --type C` - Price one contract and print its Greeks
//! - `bsm batch --input <file>` - Price a JSON array of contracts in parallel
//! - `bsm check` - Validate and print the resolved configuration
//!
//! # Architecture
//!
//! As the service layer, this crate only parses input, resolves defaults
//! from `bsm.toml` and renders results; all pricing lives in
//! `pricer_models`.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{CliConfig, OutputFormat};
use report::ContractRecord;

/// Black-Scholes-Merton option pricer CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option
    Price {
        /// Option type (C, P, call, put)
        #[arg(short = 't', long = "type")]
        option_type: String,

        /// Spot price of the underlying
        #[arg(short, long)]
        spot: Option<f64>,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: Option<f64>,

        /// Annualised volatility (0.2 = 20%)
        #[arg(long)]
        volatility: Option<f64>,

        /// Continuously compounded risk-free rate
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Continuous dividend yield
        #[arg(short, long, allow_negative_numbers = true)]
        dividend_yield: Option<f64>,

        /// Trading days to expiry
        #[arg(long)]
        days: Option<f64>,

        /// Output format (overrides the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Price a JSON array of contracts
    Batch {
        /// Path to the contracts file
        #[arg(short, long)]
        input: String,

        /// Output format (overrides the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate and print the resolved configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    // RUST_LOG wins over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration: {}", cli.config);

    match cli.command {
        Commands::Price {
            option_type,
            spot,
            strike,
            volatility,
            rate,
            dividend_yield,
            days,
            format,
        } => {
            let record = ContractRecord {
                option_type,
                spot,
                strike,
                volatility,
                rate,
                dividend_yield,
                days_to_expiry: days,
            };
            commands::price::run(&record, format, &config)
        }
        Commands::Batch { input, format } => commands::batch::run(&input, format, &config),
        Commands::Check => commands::check::run(&config),
    }
}
