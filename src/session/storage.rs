//! Durable key/value storage for session fields
//!
//! Mirrors the browser's local storage: flat string keys, string values,
//! written through on every change. A multi-key change is a single write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::warn;

use crate::config::write_private;
use crate::error::{Result, SessionError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";
pub const ROLE_KEY: &str = "role";
/// Written by older releases; read as a fallback, never written
pub const LEGACY_ROLE_KEY: &str = "userRole";

/// Every key a session may occupy
pub const SESSION_KEYS: [&str; 6] = [
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USERNAME_KEY,
    EMAIL_KEY,
    ROLE_KEY,
    LEGACY_ROLE_KEY,
];

/// String key/value store backing the session
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// Remove `remove`, then write `entries`, as one change.
    ///
    /// On error the store is left exactly as it was.
    fn update(&mut self, remove: &[&str], entries: &[(&str, &str)]) -> Result<()>;

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(&[], &[(key, value)])
    }

    fn clear(&mut self, keys: &[&str]) -> Result<()> {
        self.update(keys, &[])
    }
}

/// Apply an update to a copy of `entries`
fn updated(
    entries: &BTreeMap<String, String>,
    remove: &[&str],
    set: &[(&str, &str)],
) -> BTreeMap<String, String> {
    let mut next = entries.clone();
    for key in remove {
        next.remove(*key);
    }
    for (key, value) in set {
        next.insert(key.to_string(), value.to_string());
    }
    next
}

/// YAML-file storage (`~/.carelink/session.yaml` by default)
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. So is a file that does not parse:
    /// it is overwritten by the next update.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| SessionError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let entries = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_yaml::from_str(&contents).unwrap_or_else(|e| {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            })
        };

        Ok(Self { path, entries })
    }

    /// Default session file location
    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::config::home_dir()?.join("session.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk; an empty store removes the file
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let save_failed = |reason: String| SessionError::SaveFailed {
            path: self.path.display().to_string(),
            reason,
        };

        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(save_failed(e.to_string()).into()),
            };
        }

        let contents = serde_yaml::to_string(entries).map_err(|e| save_failed(e.to_string()))?;
        write_private(&self.path, &contents).map_err(|e| save_failed(e.to_string()).into())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn update(&mut self, remove: &[&str], entries: &[(&str, &str)]) -> Result<()> {
        let next = updated(&self.entries, remove, entries);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn update(&mut self, remove: &[&str], entries: &[(&str, &str)]) -> Result<()> {
        self.entries = updated(&self.entries, remove, entries);
        Ok(())
    }
}
