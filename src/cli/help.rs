//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name recorded on the command span (e.g. "compile", "check").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compile { .. } => "compile",
        Commands::Shapes { .. } => "shapes",
        Commands::Check { .. } => "check",
        Commands::Config => "config",
    }
}
