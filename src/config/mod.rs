pub mod values_file;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dhcp-qualifier")]
#[command(about = "Parse, normalize and check integer qualifier values")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse TEXT and print the integer value
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the canonical form of TEXT
    Format {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the value type this qualifier governs
    Type,
    /// Check every value in a TOML values file
    Check {
        file: PathBuf,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
}
