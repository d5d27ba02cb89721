//! The `encode` subcommand.

use std::io::Read;

use sgtok::Tokenizer;

use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Model file.
    #[arg(long)]
    model: String,

    /// Text to encode; reads stdin when omitted.
    text: Option<String>,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
        tokenizer.load(&self.model)?;
        log::info!(
            "loaded {} with {} merges",
            self.model,
            tokenizer.merges().len()
        );

        let text = match &self.text {
            Some(text) => text.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let ids = tokenizer.encode(&text);
        let line = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");

        Ok(())
    }
}
