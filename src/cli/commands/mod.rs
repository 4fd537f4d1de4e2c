//! Command implementations for the number-format processor CLI

pub mod convert;
pub mod detect;
pub mod shared;

pub use convert::run_convert;
pub use detect::run_detect;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch a parsed subcommand to its runner
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Detect(args) => run_detect(args),
        Commands::Convert(args) => run_convert(args),
    }
}
