use crate::core::exports::VERSION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "taskin-types")]
#[command(about = "Inspect the generated Taskin model definitions")]
#[command(version = VERSION)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the generated modules and report what they define
    Check,
    /// Print the JSON Schema of an exported model
    Show {
        /// Exported model name, e.g. Task
        name: String,
    },
    /// Print the export list
    Exports,
    /// Print the search path in lookup order
    Paths,
}
