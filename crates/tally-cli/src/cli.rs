use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = "Tally — receipt points processor", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the receipt processor HTTP server
    Serve(ServeArgs),
    /// Score a receipt JSON file without starting a server
    Score(ScoreArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a file containing one receipt as JSON
    pub file: PathBuf,
}
