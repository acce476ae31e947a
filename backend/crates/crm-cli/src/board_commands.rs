use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show every stage with its figures and ordered leads
    Show,
    /// Drag a card to another slot and persist the new order
    Move {
        /// Stage the card is in
        #[arg(long)]
        from_stage: String,
        /// Zero-based position of the card in its column
        #[arg(long)]
        from_position: usize,
        /// Stage to drop the card in
        #[arg(long)]
        to_stage: String,
        /// Zero-based drop position; omit to append
        #[arg(long)]
        to_position: Option<usize>,
    },
}
