//! Check command implementation
//!
//! Prints the resolved configuration after validation.

use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    let rendered =
        toml::to_string_pretty(config).map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    println!("{}", rendered);

    info!("Configuration OK");
    Ok(())
}
