//! The `decode` subcommand.

use sgtok::Tokenizer;

use crate::logging::LogArgs;

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Model file.
    #[arg(long)]
    model: String,

    /// Symbol ids to decode.
    #[arg(num_args = 1..)]
    ids: Vec<u32>,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
        tokenizer.load(&self.model)?;

        println!("{}", tokenizer.decode(&self.ids)?);

        Ok(())
    }
}
