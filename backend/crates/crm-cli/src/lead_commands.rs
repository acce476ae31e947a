use clap::Subcommand;

#[derive(Subcommand)]
pub enum LeadCommands {
    /// List leads ordered by board index
    List {
        /// Only leads of this stage
        #[arg(long)]
        stage: Option<String>,
    },
    /// Get a lead by ID
    Get {
        /// Lead ID
        id: String,
    },
}
