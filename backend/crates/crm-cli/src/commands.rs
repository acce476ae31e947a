use crate::{board_commands::BoardCommands, lead_commands::LeadCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Lead record operations
    Lead {
        #[command(subcommand)]
        action: LeadCommands,
    },

    /// Pipeline board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
}
