//! # `sgtok-cli`
//!
//! Command-line glue for the `sgtok` tokenizer library: train a model
//! from a text file, then encode/decode with it.
mod commands;
mod logging;

use clap::Parser;
use commands::Commands;

/// sgtok-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
