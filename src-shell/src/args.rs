//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vela - a minimal privacy-hardened browser chrome
#[derive(Parser, Debug)]
#[command(name = "vela")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// JSON configuration file
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the settings database
    #[arg(long, value_name = "DIR", env = "VELA_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve address bar text into the address that would be loaded
    Resolve {
        input: String,

        /// Search template to use instead of the saved one
        #[arg(long, value_name = "TEMPLATE")]
        search_engine: Option<String>,
    },

    /// Check an address against the navigation filter
    Check {
        address: String,

        /// Filter pattern to use instead of the configured ones (repeatable)
        #[arg(short, long = "pattern", value_name = "REGEX")]
        patterns: Vec<String>,
    },

    /// Show the privacy settings applied to browsing contexts
    Privacy,

    /// Read or change the saved settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// List toolbar features and their status
    Features,

    /// Run an interactive browsing session on stdin
    Browse,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    Show,
    SetSearchEngine { template: String },
    SetTint { color: String },
}
