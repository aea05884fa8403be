//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// File Exporter CLI
#[derive(Parser, Debug)]
#[command(name = "file-exporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the export configuration schema
    Schema,

    /// Validate an export config file and print the resolved config
    Validate {
        /// Export config file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: PathBuf,
    },

    /// Export slices read from a file, one JSON array of records per line
    Export {
        /// Export config file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: PathBuf,

        /// Input file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Worker name used in output file names
        #[arg(short, long)]
        worker_name: Option<String>,
    },
}
