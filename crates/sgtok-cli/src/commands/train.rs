//! The `train` subcommand.

use sgtok::Tokenizer;

use crate::logging::LogArgs;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input training text file.
    file: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size (bytes + merges).
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Output model path.
    #[arg(long, default_value = "sgtok.model")]
    output: String,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        log::info!("reading {}", self.file);
        let text = std::fs::read_to_string(&self.file)?;

        let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
        let merges_done = tokenizer.train(&text, self.vocab_size)?;
        log::info!("learned {merges_done} merges");

        tokenizer.save(&self.output)?;
        log::info!("model written to {}", self.output);

        Ok(())
    }
}
