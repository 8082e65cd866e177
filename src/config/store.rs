//! Flat `key=value` config store
//!
//! Loaded once at startup and rewritten in full on every feature-level
//! change. Loading never fails: unreadable files fall back to an empty map.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::value::{FromValue, Value};
use crate::constants::config::{APP_DIR, FILENAME, HEADER_LINES};

pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl Store {
    /// Empty store backed by `path`. Call [`Store::load`] to read it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn load(&mut self) {
        self.entries = match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let entries = parse_entries(&contents);
                info!(path = %self.path.display(), entries = entries.len(), "Loaded config");
                entries
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No config file found, using defaults");
                BTreeMap::new()
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read config, using defaults");
                BTreeMap::new()
            }
        };
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }

        let mut contents = String::new();
        for line in HEADER_LINES {
            contents.push_str(line);
            contents.push('\n');
        }
        contents.push('\n');
        for (key, value) in &self.entries {
            contents.push_str(&format!("{key}={value}\n"));
        }

        fs::write(&self.path, contents)
            .context(format!("Failed to write config file to {}", self.path.display()))?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "Saved config");
        Ok(())
    }

    /// Typed read. Returns `default` when the key is missing or the stored
    /// value does not convert.
    pub fn get<T: FromValue>(&self, key: &str, default: T) -> T {
        match self.entries.get(key) {
            Some(value) => T::from_value(value).unwrap_or_else(|| {
                debug!(key, value = %value, "Stored value has unexpected type, using default");
                default
            }),
            None => default,
        }
    }

    /// In-memory write. Persisting is up to the caller.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn feature_enabled(&self, feature_key: &str, default: bool) -> bool {
        self.get(&enabled_key(feature_key), default)
    }

    pub fn set_feature_enabled(&mut self, feature_key: &str, enabled: bool) {
        self.set(enabled_key(feature_key), enabled);
        self.save_logged();
    }

    pub fn feature_value<T: FromValue>(&self, feature_key: &str, name: &str, default: T) -> T {
        self.get(&value_key(feature_key, name), default)
    }

    pub fn set_feature_value(&mut self, feature_key: &str, name: &str, value: impl Into<Value>) {
        self.set(value_key(feature_key, name), value);
        self.save_logged();
    }

    fn save_logged(&self) {
        if let Err(e) = self.save() {
            error!(error = ?e, "Failed to save config");
        }
    }
}

fn enabled_key(feature_key: &str) -> String {
    format!("feature_{feature_key}_enabled")
}

fn value_key(feature_key: &str, name: &str) -> String {
    format!("feature_{feature_key}_{name}")
}

fn parse_entries(contents: &str) -> BTreeMap<String, Value> {
    let mut entries = BTreeMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        entries.insert(key.to_string(), Value::parse(value));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("modpanel.cfg"));
        (dir, store)
    }

    #[test]
    fn test_float_roundtrip() {
        let (_dir, mut store) = temp_store();
        store.set("k", 3.5f32);
        store.save().unwrap();
        store.load();
        assert_eq!(store.get("k", 0.0f32), 3.5);
    }

    #[test]
    fn test_roundtrip_across_types() {
        let (_dir, mut store) = temp_store();
        store.set("flag", true);
        store.set("ratio", 0.25f32);
        store.set("count", 7i32);
        store.set("label", "hello there");
        store.save().unwrap();

        let mut reloaded = Store::new(store.path());
        reloaded.load();
        assert_eq!(reloaded.get("flag", false), true);
        assert_eq!(reloaded.get("ratio", 0.0f32), 0.25);
        assert_eq!(reloaded.get("count", 0i32), 7);
        assert_eq!(reloaded.get("label", String::new()), "hello there");
    }

    #[test]
    fn test_large_int_roundtrip_is_exact() {
        let (_dir, mut store) = temp_store();
        store.set("count", 16_777_217i32);
        store.set("frames", u32::MAX);
        store.save().unwrap();

        let mut reloaded = Store::new(store.path());
        reloaded.load();
        assert_eq!(reloaded.get("count", 0i32), 16_777_217);
        assert_eq!(reloaded.get("frames", 0u32), u32::MAX);
    }

    #[test]
    fn test_mismatched_type_returns_default() {
        let (_dir, mut store) = temp_store();
        store.set("label", "hello");
        store.set("flag", true);
        store.set("ratio", 1.5f32);

        assert_eq!(store.get("label", 9i32), 9);
        assert_eq!(store.get("label", false), false);
        assert_eq!(store.get("flag", 2.0f32), 2.0);
        assert_eq!(store.get("ratio", 4i32), 4);
        assert_eq!(store.get("missing", 11u32), 11);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_dir, mut store) = temp_store();
        store.set("stale", 1i32);
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_skips_comments_blank_and_malformed_lines() {
        let (_dir, mut store) = temp_store();
        fs::write(
            store.path(),
            "# header\n\nno_equals_here\n=orphan\n a = b=c \nflag=False\n",
        )
        .unwrap();
        store.load();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a", String::new()), "b=c");
        assert_eq!(store.get("flag", true), false);
    }

    #[test]
    fn test_load_unreadable_path_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        // a directory cannot be read as a file
        let mut store = Store::new(dir.path());
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_writes_header_and_sorted_entries() {
        let (_dir, mut store) = temp_store();
        store.set("b", 2i32);
        store.set("a", true);
        store.save().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with('#'));
        assert!(lines[1].starts_with('#'));
        assert_eq!(lines[2], "");
        assert_eq!(&lines[3..], &["a=True", "b=2"]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("nested").join("modpanel.cfg"));
        store.save().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_feature_enabled_scenario() {
        let (_dir, mut store) = temp_store();
        fs::write(store.path(), "").unwrap();
        store.load();
        assert_eq!(store.feature_enabled("Speed_Hack", false), false);

        store.set_feature_enabled("Speed_Hack", true);

        let mut reloaded = Store::new(store.path());
        reloaded.load();
        assert_eq!(reloaded.feature_enabled("Speed_Hack", false), true);
        assert!(reloaded.contains_key("feature_Speed_Hack_enabled"));
    }

    #[test]
    fn test_feature_value_is_scoped_and_saved() {
        let (_dir, mut store) = temp_store();
        store.set_feature_value("Time_Scale", "timeScale", 4.0f32);

        let mut reloaded = Store::new(store.path());
        reloaded.load();
        assert_eq!(reloaded.feature_value("Time_Scale", "timeScale", 1.0f32), 4.0);
        assert_eq!(reloaded.get("feature_Time_Scale_timeScale", 0.0f32), 4.0);
    }
}
