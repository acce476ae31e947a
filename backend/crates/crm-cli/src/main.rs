//! crm - CRM lead board CLI
//!
//! Reads and reorders the lead pipeline kept by the CRM custom service.
//!
//! # Examples
//!
//! ```bash
//! # Show the board
//! crm board show --pretty
//!
//! # Drop the first "new" card into "won" after its second card
//! crm board move --from-stage new --from-position 0 --to-stage won --to-position 2
//!
//! # List one stage
//! crm lead list --stage contacted
//! ```

use crm_cli::{Cli, CliResult, apply_overrides, logger, run};
use crm_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match setup(&cli) {
        Ok(config) => run(&cli, &config).await,
        Err(e) => Err(e),
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty() {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then start logging.
fn setup(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;
    apply_overrides(cli, &mut config);
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    Ok(config)
}
