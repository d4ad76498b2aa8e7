//! Path removal for zenilib-clean
//!
//! `remove_matching` expands one glob pattern against the root, drops
//! matches vetoed by exclusion substrings and hands the rest to
//! `remove_path`, one at a time. Removal is best-effort: a path that
//! cannot be deleted is reported and counted, never an error.

use crate::error::CleanError;
use crate::prompt::Confirm;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What happened to a single candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Deleted (or printed, in dry-run mode)
    Removed,
    /// The prompt was answered with anything but an affirmative
    Declined,
    /// The path was already gone
    Missing,
    /// The delete attempt failed; the run continues
    Failed,
}

/// Aggregated outcomes for a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub removed: usize,
    pub declined: usize,
    pub missing: usize,
    pub failed: usize,
    pub excluded: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: RemoveOutcome) {
        match outcome {
            RemoveOutcome::Removed => self.removed += 1,
            RemoveOutcome::Declined => self.declined += 1,
            RemoveOutcome::Missing => self.missing += 1,
            RemoveOutcome::Failed => self.failed += 1,
        }
    }

    /// One-line report printed at the end of a run.
    pub fn render(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would be removed" } else { "removed" };
        let mut line = format!("{} {}", self.removed, verb);
        if self.declined > 0 {
            line.push_str(&format!(", {} declined", self.declined));
        }
        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        if self.excluded > 0 {
            line.push_str(&format!(", {} excluded", self.excluded));
        }
        line
    }
}

/// Delete a single path, asking `confirm` first.
///
/// A missing path is a non-event: no prompt, no filesystem operation.
/// Directories are removed recursively, skipping entries that refuse to
/// go; files get a single unlink. In dry-run mode the path is printed
/// instead and nothing is asked or deleted.
pub fn remove_path(
    path: &Path,
    display: &str,
    confirm: &mut dyn Confirm,
    dry_run: bool,
) -> RemoveOutcome {
    // symlink_metadata so a dangling symlink still counts as present
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return RemoveOutcome::Missing,
    };

    if dry_run {
        println!("would remove: {}", display);
        return RemoveOutcome::Removed;
    }

    if metadata.is_dir() {
        if !confirm.confirm(&format!("Delete directory '{}'?", display)) {
            return RemoveOutcome::Declined;
        }
        if remove_dir_best_effort(path) {
            println!("removed: {}", display);
            RemoveOutcome::Removed
        } else {
            eprintln!("zenilib-clean: warning: could not fully remove '{}'", display);
            RemoveOutcome::Failed
        }
    } else {
        if !confirm.confirm(&format!("Delete file '{}'?", display)) {
            return RemoveOutcome::Declined;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                println!("removed: {}", display);
                RemoveOutcome::Removed
            }
            Err(e) if e.kind() == ErrorKind::NotFound => RemoveOutcome::Missing,
            Err(e) => {
                eprintln!("zenilib-clean: warning: cannot remove '{}': {}", display, e);
                RemoveOutcome::Failed
            }
        }
    }
}

/// Recursively delete a directory, skipping entries that fail.
///
/// Returns true when the directory itself is gone afterwards. Symlinks
/// are unlinked, never followed.
fn remove_dir_best_effort(path: &Path) -> bool {
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let entry_path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                remove_dir_best_effort(&entry_path);
            } else {
                let _ = fs::remove_file(&entry_path);
            }
        }
    }
    fs::remove_dir(path).is_ok()
}

/// Expand `pattern` under `root` and remove every match not vetoed by an
/// exclusion substring. Matches are processed independently, in whatever
/// order glob expansion yields; one match's outcome never affects
/// another's.
pub fn remove_matching(
    root: &Path,
    pattern: &str,
    excludes: &[String],
    confirm: &mut dyn Confirm,
    dry_run: bool,
    summary: &mut Summary,
) -> Result<(), CleanError> {
    // The root half is literal; only the pattern half may glob.
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    let matches = glob::glob(&full_pattern).map_err(|source| CleanError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    for entry in matches {
        // Unreadable directories hit during expansion are skipped.
        let Ok(path) = entry else { continue };

        // Exclusions match against the root-relative path string.
        let display = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        if excludes.iter().any(|needle| display.contains(needle.as_str())) {
            summary.excluded += 1;
            continue;
        }

        summary.record(remove_path(&path, &display, confirm, dry_run));
    }

    Ok(())
}
