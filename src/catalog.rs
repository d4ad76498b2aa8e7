//! Profile catalog for zenilib-clean
//!
//! The catalog ships inside the binary as `profiles.toml`. Each profile
//! is an ordered pattern list plus the names of profiles that run before
//! it; one generic runner interprets the catalog, so adding a cleanup
//! level means adding data, not code.

use crate::error::CleanError;
use serde::Deserialize;

// Embed the catalog at compile time
const PROFILES_TOML: &str = include_str!("../profiles.toml");

/// One glob pattern plus the substrings that veto individual matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: String,
    pub excludes: Vec<String>,
}

/// A named cleanup level.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    /// Profiles executed before this one, in order
    pub includes: Vec<String>,
    /// Whether this profile's own deletions run unattended by default
    pub auto_accept: bool,
    pub entries: Vec<PatternEntry>,
}

/// The full set of profiles, in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "profile")]
    profiles: Vec<ProfileDef>,
}

#[derive(Debug, Deserialize)]
struct ProfileDef {
    name: String,
    #[serde(default)]
    includes: Vec<String>,
    #[serde(default = "default_true")]
    auto_accept: bool,
    #[serde(default)]
    patterns: Vec<EntryDef>,
}

/// Catalog entries are either a bare pattern string or a table carrying
/// exclusion substrings alongside it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryDef {
    Bare(String),
    Full {
        pattern: String,
        #[serde(default)]
        excludes: Vec<String>,
    },
}

impl From<EntryDef> for PatternEntry {
    fn from(def: EntryDef) -> Self {
        match def {
            EntryDef::Bare(pattern) => Self {
                pattern,
                excludes: Vec::new(),
            },
            EntryDef::Full { pattern, excludes } => Self { pattern, excludes },
        }
    }
}

impl Catalog {
    /// Parse the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CleanError> {
        Self::from_toml(PROFILES_TOML)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CleanError> {
        let file: CatalogFile = toml::from_str(text)?;
        let profiles = file
            .profiles
            .into_iter()
            .map(|def| Profile {
                name: def.name,
                includes: def.includes,
                auto_accept: def.auto_accept,
                entries: def.patterns.into_iter().map(PatternEntry::from).collect(),
            })
            .collect();
        Ok(Self { profiles })
    }

    /// Profile names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Resolve a profile name into its execution chain: includes first,
    /// depth-first in stated order, then the profile itself. A profile
    /// pulled in through two different includes runs twice, exactly as
    /// the chained invocations would. A profile that is its own ancestor
    /// is an error.
    pub fn resolve(&self, name: &str) -> Result<Vec<&Profile>, CleanError> {
        let mut chain = Vec::new();
        let mut stack = Vec::new();
        self.resolve_into(name, &mut stack, &mut chain)?;
        Ok(chain)
    }

    fn resolve_into<'a>(
        &'a self,
        name: &str,
        stack: &mut Vec<String>,
        chain: &mut Vec<&'a Profile>,
    ) -> Result<(), CleanError> {
        if stack.iter().any(|n| n == name) {
            return Err(CleanError::ProfileCycle {
                name: name.to_string(),
            });
        }
        let profile = self.get(name).ok_or_else(|| CleanError::UnknownProfile {
            name: name.to_string(),
            available: self.names(),
        })?;

        stack.push(profile.name.clone());
        for include in &profile.includes {
            self.resolve_into(include, stack, chain)?;
        }
        stack.pop();

        chain.push(profile);
        Ok(())
    }
}
