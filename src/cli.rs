use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "locguard")]
#[command(author, version, about = "Localized content guard - validate translated Markdown trees")]
#[command(long_about = "A tool to validate localized Markdown content against per-folder rules.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - A validation rule failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate all governed folders under a root
    Check(CheckArgs),

    /// Generate a default rule file
    Init(InitArgs),

    /// Rule file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root folder to check
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to the site configuration (default: <ROOT>/site.toml)
    #[arg(long)]
    pub site_config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated rule file
    #[arg(short, long, default_value = ".locguard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Check that a rule file parses and is semantically valid
    Validate {
        /// Path to the rule file
        config: PathBuf,
    },

    /// Print the effective rule set with defaults applied
    Show {
        /// Path to the rule file
        config: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
