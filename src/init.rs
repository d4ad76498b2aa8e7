//! Configuration initialization for zenilib-clean
//!
//! Generates a default config file at ~/.config/zenilib-clean/config.toml

use crate::config::Config;
use crate::error::CleanError;
use std::fs;

/// Default config template, fully commented out
const CONFIG_TEMPLATE: &str = r#"# zenilib-clean configuration
# Location: ~/.config/zenilib-clean/config.toml
#
# Everything here is optional. Missing keys keep their defaults:
# clean the current directory, honor each profile's own accept mode,
# no extra exclusions.

# Root directory cleaned when --root is not given.
# Supports tilde (~) expansion for the home directory.
# root = "~/projects/zenilib"

# Confirm every deletion, even for unattended profiles.
# A run with --yes still skips the prompts.
# always_confirm = true

# Substrings that veto matches of every pattern.
# excludes = ["Launcher.vcxproj.user"]
"#;

/// Run the init subcommand
pub fn run_init() -> Result<(), CleanError> {
    let config_path = Config::config_path().ok_or_else(|| {
        CleanError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot determine config directory",
        ))
    })?;

    let config_dir = config_path.parent().ok_or_else(|| {
        CleanError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot determine config directory",
        ))
    })?;

    // Create config directory if needed
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    // Never clobber an existing config
    if config_path.exists() {
        eprintln!("Config file already exists: {}", config_path.display());
        eprintln!("To regenerate, delete the file first and run `zenilib-clean init` again.");
        return Ok(());
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;

    println!("Created config file: {}", config_path.display());
    println!();
    println!("All keys start commented out; edit the file to set a default root,");
    println!("force confirmation, or add exclusions.");

    Ok(())
}
