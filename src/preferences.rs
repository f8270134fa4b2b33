//! Durable key-value preferences written by the game itself.
//!
//! Screens read flags such as `fullscreen` when they are shown and write
//! them back when the player changes something. Writes stay in memory until
//! [`PreferencesStore::flush`] is called, which makes them durable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Well-known preference keys
pub mod keys {
    /// Draw over the whole terminal instead of a centered window
    pub const FULLSCREEN: &str = "fullscreen";
    /// The player has already answered the tutorial prompt
    pub const TUTORIAL_ASKED: &str = "tutorialAsked";
    /// Sound effects are enabled (absent means enabled)
    pub const SOUND: &str = "sound";
    pub const GAMES_PLAYED: &str = "gamesPlayed";
    pub const GAMES_SOLVED: &str = "gamesSolved";
    pub const BEST_MOVES: &str = "bestMoves";
    pub const BEST_SECONDS: &str = "bestSeconds";
    pub const LAST_SOLVED: &str = "lastSolved";
}

/// A single stored value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

/// Boolean/integer/string key-value persistence with explicit flush
pub trait PreferencesStore {
    fn get(&self, key: &str) -> Option<&PrefValue>;

    fn put(&mut self, key: &str, value: PrefValue);

    fn remove(&mut self, key: &str);

    /// Make every pending write durable
    fn flush(&mut self) -> Result<()>;

    /// `false` when absent or not a boolean
    fn get_boolean(&self, key: &str) -> bool {
        self.get_boolean_or(key, false)
    }

    fn get_boolean_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(PrefValue::Bool(b)) => *b,
            _ => default,
        }
    }

    fn put_boolean(&mut self, key: &str, value: bool) {
        self.put(key, PrefValue::Bool(value));
    }

    /// `0` when absent or not an integer
    fn get_integer(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(PrefValue::Integer(n)) => *n,
            _ => 0,
        }
    }

    fn put_integer(&mut self, key: &str, value: i64) {
        self.put(key, PrefValue::Integer(value));
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(PrefValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.put(key, PrefValue::Text(value.to_string()));
    }
}

/// Preferences kept only in memory; `flush` is a no-op
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Preferences persisted as a flat TOML table
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
    dirty: bool,
}

impl FilePreferences {
    /// Load preferences from `path`; a missing file means no preferences yet
    pub fn load(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preferences: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences: {:?}", path))?
        } else {
            debug!("No preferences at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes that have not been flushed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forget every stored value; takes effect on the next flush
    pub fn clear(&mut self) {
        if !self.values.is_empty() {
            self.values.clear();
            self.dirty = true;
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferencesStore for FilePreferences {
    fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let content =
            toml::to_string_pretty(&self.values).with_context(|| "Failed to serialize preferences")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory: {:?}", parent))?;
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences: {:?}", self.path))?;

        // Set secure permissions (600: owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)
                .with_context(|| format!("Failed to get file metadata: {:?}", self.path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", self.path))?;
        }

        self.dirty = false;
        info!("Flushed {} preferences to {:?}", self.values.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_absent() {
        let prefs = MemoryPreferences::new();
        assert!(!prefs.get_boolean(keys::FULLSCREEN));
        assert!(prefs.get_boolean_or(keys::SOUND, true));
        assert_eq!(prefs.get_integer(keys::GAMES_PLAYED), 0);
        assert_eq!(prefs.get_string(keys::LAST_SOLVED), None);
    }

    #[test]
    fn test_type_mismatch_falls_back_to_default() {
        let mut prefs = MemoryPreferences::new();
        prefs.put_string(keys::FULLSCREEN, "yes");
        assert!(!prefs.get_boolean(keys::FULLSCREEN));
        assert_eq!(prefs.get_integer(keys::FULLSCREEN), 0);
    }

    #[test]
    fn test_file_round_trip_after_flush() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs").join("preferences.toml");

        let mut prefs = FilePreferences::load(&path).unwrap();
        prefs.put_boolean(keys::TUTORIAL_ASKED, true);
        prefs.put_integer(keys::BEST_MOVES, 42);
        prefs.put_string(keys::LAST_SOLVED, "2026-01-01T00:00:00Z");
        assert!(prefs.is_dirty());
        prefs.flush().unwrap();
        assert!(!prefs.is_dirty());

        let reloaded = FilePreferences::load(&path).unwrap();
        assert!(reloaded.get_boolean(keys::TUTORIAL_ASKED));
        assert_eq!(reloaded.get_integer(keys::BEST_MOVES), 42);
        assert_eq!(
            reloaded.get_string(keys::LAST_SOLVED).as_deref(),
            Some("2026-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_unflushed_writes_are_lost() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferences::load(&path).unwrap();
        prefs.put_boolean(keys::FULLSCREEN, true);
        drop(prefs);

        let reloaded = FilePreferences::load(&path).unwrap();
        assert!(!reloaded.get_boolean(keys::FULLSCREEN));
    }

    #[test]
    fn test_flush_without_changes_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferences::load(&path).unwrap();
        prefs.flush().unwrap();
        assert!(!path.exists());

        // writing the value already stored is not a change either
        prefs.put_boolean(keys::FULLSCREEN, true);
        prefs.flush().unwrap();
        prefs.put_boolean(keys::FULLSCREEN, true);
        assert!(!prefs.is_dirty());
    }

    #[test]
    fn test_clear_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferences::load(&path).unwrap();
        prefs.put_boolean(keys::TUTORIAL_ASKED, true);
        prefs.flush().unwrap();
        prefs.clear();
        prefs.flush().unwrap();

        let reloaded = FilePreferences::load(&path).unwrap();
        assert!(reloaded.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_flushed_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferences::load(&path).unwrap();
        prefs.put_boolean(keys::SOUND, false);
        prefs.flush().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
