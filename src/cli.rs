use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediatitle")]
#[command(author, version, about = "Clean up media folder names for metadata search")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one or more titles and display the results
    Parse {
        /// Titles to parse
        #[arg(required = true)]
        titles: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse the entry names of a library directory
    Scan {
        /// Directory to scan
        #[arg(required = true)]
        dir: PathBuf,

        /// Directory levels to descend (overrides config)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Include file names, not just directories (overrides config)
        #[arg(long)]
        files: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Write a config file with default settings
    InitConfig {
        /// Where to write the config
        #[arg(default_value = "mediatitle.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}
