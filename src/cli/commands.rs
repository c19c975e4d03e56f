//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayvault")]
#[command(about = "Convert a Day One JSON export into Markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the export into one note per entry
    Convert {
        /// Config file (default: ./dayvault.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Folder holding the export (overrides config and DAYVAULT_ROOT)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Write every note directly into the journal folder
        #[arg(long)]
        flat: bool,
    },

    /// Write a default config file
    Init {
        /// Directory or file to write (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}
