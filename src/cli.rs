//! CLI argument parser for zenilib-clean
//!
//! Provides type-safe argument parsing using clap derive.

use crate::runner::AcceptOverride;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for zenilib-clean
#[derive(Parser, Debug)]
#[command(
    name = "zenilib-clean",
    version,
    about = "Profile-based build artifact cleanup for zenilib project trees",
    long_about = "Removes generated build artifacts (object files, IDE caches, debug\n\
                  binaries, architecture-specific outputs) matching the glob patterns\n\
                  of a named cleanup profile. Unattended profiles delete without\n\
                  asking; interactive ones confirm each deletion on stdin."
)]
pub struct CliArgs {
    /// Subcommand (e.g., init, list)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Cleanup profile to run
    #[arg(value_name = "PROFILE", default_value = "clean")]
    pub profile: String,

    /// Root directory to clean (default: configured root, else the
    /// current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Accept every deletion without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Confirm every deletion, even for unattended profiles
    #[arg(short, long, conflicts_with = "yes")]
    pub ask: bool,

    /// Show what would be removed without deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration file (~/.config/zenilib-clean/config.toml)
    Init,
    /// List the available cleanup profiles
    List,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Effective accept override for this run. `--yes` beats everything;
    /// `--ask` and the `always_confirm` config key force prompting.
    pub fn accept_override(&self, always_confirm: bool) -> AcceptOverride {
        if self.yes {
            AcceptOverride::AlwaysAccept
        } else if self.ask || always_confirm {
            AcceptOverride::AlwaysAsk
        } else {
            AcceptOverride::ProfileDefault
        }
    }
}
