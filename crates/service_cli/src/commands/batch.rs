//! Batch command implementation
//!
//! Prices a JSON array of contracts in parallel. Each contract is evaluated
//! independently; a contract that fails is reported in its own row and does
//! not abort the batch.

use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{CliConfig, MarketDefaults, OutputFormat};
use crate::report::{render_json, render_table, ContractRecord, PricingReport};
use crate::{CliError, Result};

/// Run the batch command
pub fn run(input: &str, format: Option<OutputFormat>, config: &CliConfig) -> Result<()> {
    let format = format.unwrap_or(config.format);
    info!("Starting batch pricing...");
    info!("  Input: {}", input);

    let path = Path::new(input);
    if !path.exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<ContractRecord> = serde_json::from_str(&content)?;
    info!("  Contracts: {}", records.len());

    let reports = evaluate_all(&records, &config.defaults);

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        warn!("{} of {} contracts could not be priced", failed, reports.len());
    }

    let output = match format {
        OutputFormat::Table => render_table(&reports),
        OutputFormat::Json => render_json(&reports)?,
    };
    println!("{}", output);

    info!("Batch pricing complete");
    Ok(())
}

/// Evaluates every record in parallel, preserving input order.
pub fn evaluate_all(records: &[ContractRecord], defaults: &MarketDefaults) -> Vec<PricingReport> {
    records
        .par_iter()
        .map(|record| PricingReport::evaluate(record, defaults))
        .collect()
}
