//! zenilib-clean: build artifact cleanup for zenilib project trees
//!
//! Runs a named cleanup profile from the embedded catalog against a
//! project tree, deleting generated files and directories by glob
//! pattern with optional per-deletion confirmation.

use std::io;
use std::process::ExitCode;

use zenilib_clean::catalog::Catalog;
use zenilib_clean::cli::{CliArgs, Commands};
use zenilib_clean::config::Config;
use zenilib_clean::error::CleanError;
use zenilib_clean::init;
use zenilib_clean::prompt::LinePrompter;
use zenilib_clean::runner::{self, RunOptions};
use zenilib_clean::workdir;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zenilib-clean: {}", e);
            e.exit_code().into()
        }
    }
}

/// Main execution logic
fn run() -> Result<(), CleanError> {
    let args = CliArgs::parse_args();

    match args.command {
        Some(Commands::Init) => return init::run_init(),
        Some(Commands::List) => return list_profiles(),
        None => {}
    }

    let config = Config::load();
    let catalog = Catalog::builtin()?;
    let root = workdir::resolve_root(args.root.as_deref(), &config)?;

    let opts = RunOptions {
        root,
        accept: args.accept_override(config.always_confirm),
        dry_run: args.dry_run,
        extra_excludes: config.excludes,
    };

    let stdin = io::stdin();
    let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
    let summary = runner::run(&catalog, &args.profile, &opts, &mut prompter)?;

    println!("{}", summary.render(args.dry_run));
    Ok(())
}

/// Print the catalog for the `list` subcommand
fn list_profiles() -> Result<(), CleanError> {
    let catalog = Catalog::builtin()?;
    for profile in catalog.profiles() {
        let mode = if profile.auto_accept {
            "unattended"
        } else {
            "interactive"
        };
        let includes = if profile.includes.is_empty() {
            String::new()
        } else {
            format!(", after {}", profile.includes.join(", "))
        };
        println!(
            "{:<10} {} patterns, {}{}",
            profile.name,
            profile.entries.len(),
            mode,
            includes
        );
    }
    Ok(())
}
