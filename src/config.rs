//! Configuration for zenilib-clean
//!
//! Loads user configuration from `~/.config/zenilib-clean/config.toml`.
//! Everything here is optional; a missing or broken config file never
//! stops a run.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration structure
///
/// Example config.toml:
/// ```toml
/// # Root directory cleaned when --root is not given.
/// root = "~/projects/zenilib"
///
/// # Confirm every deletion, even for auto-accept profiles.
/// # --yes still overrides this.
/// always_confirm = true
///
/// # Substrings that veto matches of every pattern.
/// excludes = ["Launcher.vcxproj.user"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default root directory for cleanup runs (tilde expanded)
    #[serde(default)]
    pub root: Option<String>,

    /// If true, every profile prompts as if it were interactive.
    /// A run-level `--yes` still wins.
    #[serde(default)]
    pub always_confirm: bool,

    /// Extra exclusion substrings appended to every pattern entry
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl Config {
    /// Get the config file path: ~/.config/zenilib-clean/config.toml
    ///
    /// Uses the XDG-style path (~/.config/) on all platforms. If the
    /// ZENILIB_CLEAN_CONFIG environment variable is set, that path is
    /// used instead.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ZENILIB_CLEAN_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|d| d.join(".config").join("zenilib-clean").join("config.toml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Self {
        Self::load_from_path(Self::config_path())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "zenilib-clean: warning: config parse error ({}): {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!(
                    "zenilib-clean: warning: cannot read config ({}): {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// The configured root directory, tilde expanded
    pub fn root_path(&self) -> Option<PathBuf> {
        self.root.as_deref().map(Self::expand_tilde)
    }

    /// Expand a tilde (~) prefix to the user's home directory
    fn expand_tilde(path: &str) -> PathBuf {
        if path == "~" {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
        } else if let Some(rest) = path.strip_prefix("~/") {
            dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(path))
        } else {
            PathBuf::from(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.root.is_none());
        assert!(!config.always_confirm);
        assert!(config.excludes.is_empty());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.root.is_none());
        assert!(!config.always_confirm);
        assert!(config.excludes.is_empty());
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
root = "/srv/builds/zenilib"
always_confirm = true
excludes = ["Launcher.vcxproj.user", ".keep"]
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.root.as_deref(), Some("/srv/builds/zenilib"));
        assert!(config.always_confirm);
        assert_eq!(config.excludes, vec!["Launcher.vcxproj.user", ".keep"]);
    }

    #[test]
    fn test_load_from_missing_path_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from_path(Some(tmp.path().join("absent.toml")));
        assert!(config.root.is_none());
        assert!(!config.always_confirm);
    }

    #[test]
    fn test_load_from_none_gives_defaults() {
        let config = Config::load_from_path(None);
        assert!(config.root.is_none());
    }

    #[test]
    fn test_load_from_valid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "always_confirm = true\n").unwrap();

        let config = Config::load_from_path(Some(path));
        assert!(config.always_confirm);
    }

    #[test]
    fn test_load_from_broken_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "always_confirm = = nope").unwrap();

        let config = Config::load_from_path(Some(path));
        assert!(!config.always_confirm);
        assert!(config.root.is_none());
    }

    #[test]
    fn test_root_path_plain() {
        let config: Config = toml::from_str(r#"root = "/srv/builds""#).unwrap();
        assert_eq!(config.root_path(), Some(PathBuf::from("/srv/builds")));
    }

    #[test]
    fn test_root_path_tilde_expanded() {
        let config: Config = toml::from_str(r#"root = "~/projects/zenilib""#).unwrap();
        let expanded = config.root_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("projects/zenilib"));
        } else {
            assert_eq!(expanded, PathBuf::from("~/projects/zenilib"));
        }
    }

    #[test]
    fn test_root_path_absent() {
        let config = Config::default();
        assert!(config.root_path().is_none());
    }
}
