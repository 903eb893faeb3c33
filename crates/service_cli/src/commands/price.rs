//! Price command implementation
//!
//! Prices a single contract from command line flags, falling back to the
//! configured market defaults for anything omitted.

use tracing::{debug, info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::report::{render_json, render_table, ContractRecord, PricingReport};
use crate::Result;

/// Run the price command
pub fn run(record: &ContractRecord, format: Option<OutputFormat>, config: &CliConfig) -> Result<()> {
    let format = format.unwrap_or(config.format);
    debug!("Output format: {:?}", format);

    let output = price(record, format, config)?;
    println!("{}", output);

    info!("Pricing complete");
    Ok(())
}

/// Prices `record` and renders it; a contract that cannot be priced is an error.
pub fn price(record: &ContractRecord, format: OutputFormat, config: &CliConfig) -> Result<String> {
    let contract = record.to_contract(&config.defaults)?;
    info!("Pricing a Black Scholes {}", contract.option_type());
    debug!(
        spot = contract.spot(),
        strike = contract.strike(),
        volatility = contract.volatility(),
        rate = contract.rate(),
        dividend_yield = contract.dividend_yield(),
        days_to_expiry = contract.days_to_expiry(),
        "Resolved contract"
    );

    let greeks = match contract.greeks() {
        Ok(greeks) => greeks,
        Err(e) => {
            warn!(
                "Closed form undefined; intrinsic value is {:.6}",
                contract.intrinsic_value()
            );
            return Err(e.into());
        }
    };

    let report = PricingReport::priced(&contract, greeks);
    match format {
        OutputFormat::Table => Ok(render_table(&[report])),
        OutputFormat::Json => render_json(&[report]),
    }
}
