use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "crm")]
#[command(about = "CRM lead board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Service URL (overrides config and CRM_SERVICE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Bearer token sent to the service
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
