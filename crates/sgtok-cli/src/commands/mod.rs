//! Subcommand definitions and dispatch.

mod decode;
mod encode;
mod train;

pub use decode::DecodeArgs;
pub use encode::EncodeArgs;
pub use train::TrainArgs;

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a tokenizer model from a text file.
    Train(TrainArgs),

    /// Encode text into symbol ids with a trained model.
    Encode(EncodeArgs),

    /// Decode symbol ids into text with a trained model.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the selected subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(args) => args.run(),
            Commands::Encode(args) => args.run(),
            Commands::Decode(args) => args.run(),
        }
    }
}
