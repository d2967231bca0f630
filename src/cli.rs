//! CLI argument parsing for the ridematch worker binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ridematch-worker", about = "Community-event ride matching worker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the NATS-connected worker server (default if no subcommand given)
    Serve,
    /// Run one matching pass against a JSON file on disk and print the result
    MatchFile {
        /// Path to a JSON-encoded `MatchRequest`
        #[arg(long)]
        input: PathBuf,
    },
}
