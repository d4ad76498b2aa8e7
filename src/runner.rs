//! Profile execution for zenilib-clean
//!
//! One runner interprets the whole catalog: resolve the requested
//! profile into its chain, then walk every pattern entry in order. The
//! accept mode is threaded through `RunOptions` per run; each profile's
//! own entries fall back to that profile's default, so composed profiles
//! cannot silently override each other.

use crate::catalog::Catalog;
use crate::error::CleanError;
use crate::prompt::{AutoAccept, Confirm};
use crate::remover::{self, Summary};
use std::path::PathBuf;

/// Run-level accept override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOverride {
    /// Each profile's own `auto_accept` default applies
    ProfileDefault,
    /// Accept every deletion without prompting (`--yes`)
    AlwaysAccept,
    /// Prompt for every deletion (`--ask`)
    AlwaysAsk,
}

/// Everything one run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory all patterns are interpreted against
    pub root: PathBuf,
    pub accept: AcceptOverride,
    pub dry_run: bool,
    /// Exclusion substrings appended to every pattern entry
    pub extra_excludes: Vec<String>,
}

/// Execute a profile chain against the root, aggregating outcomes.
///
/// `interactive` answers the prompts of non-auto-accept segments; it is
/// never consulted for auto-accepted or dry-run deletions.
pub fn run(
    catalog: &Catalog,
    profile_name: &str,
    opts: &RunOptions,
    interactive: &mut dyn Confirm,
) -> Result<Summary, CleanError> {
    let chain = catalog.resolve(profile_name)?;
    let mut summary = Summary::default();
    let mut auto_accept = AutoAccept;

    for profile in chain {
        let auto = match opts.accept {
            AcceptOverride::AlwaysAccept => true,
            AcceptOverride::AlwaysAsk => false,
            AcceptOverride::ProfileDefault => profile.auto_accept,
        };

        for entry in &profile.entries {
            let mut excludes = entry.excludes.clone();
            excludes.extend(opts.extra_excludes.iter().cloned());

            let confirm: &mut dyn Confirm = if auto {
                &mut auto_accept
            } else {
                &mut *interactive
            };
            remover::remove_matching(
                &opts.root,
                &entry.pattern,
                &excludes,
                confirm,
                opts.dry_run,
                &mut summary,
            )?;
        }
    }

    Ok(summary)
}
