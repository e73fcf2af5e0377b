//! CLI parse: clap types for liftplan. No behavior; definitions only.

use crate::types::Unit;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Liftplan CLI - compile workout plans into executable programs
#[derive(Parser, Debug)]
#[command(name = "liftplan")]
#[command(about = "Compile multi-week workout plans into flattened, executable programs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where liftplan.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a plan into a program (JSON)
    Compile {
        /// Evaluated plan (JSON)
        #[arg(long)]
        plan: PathBuf,
        /// Exercise catalog (JSON array)
        #[arg(long)]
        catalog: PathBuf,
        /// Plan unit; overrides compiler.unit from configuration
        #[arg(long)]
        unit: Option<Unit>,
        /// Write the program here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// List canonical day shapes and where they occur
    Shapes {
        #[arg(long)]
        plan: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = ShapesFormat::Text)]
        format: ShapesFormat,
    },
    /// Report everything compilation would skip or reject
    Check {
        #[arg(long)]
        plan: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapesFormat {
    Text,
    Json,
}
