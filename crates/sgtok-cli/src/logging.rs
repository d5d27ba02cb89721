//! Stderr logging setup shared by the subcommands.

/// Logging args.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Initialize stderr logging at `base` + the repeated `-v` count.
    pub fn setup_logging(
        &self,
        base: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .module(module_path!())
            .module("sgtok")
            .verbosity(base + self.verbose as usize)
            .init()?;
        Ok(())
    }
}
