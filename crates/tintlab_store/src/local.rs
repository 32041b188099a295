//! Local theme cache
//!
//! A single JSON file mapping snapshot ids to snapshots. Reads tolerate a
//! missing or corrupted file (treated as empty, with a warning) so a bad
//! cache can never take the playground down.

use crate::{PersistError, ThemeSnapshot};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-backed id -> snapshot cache
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The per-user default cache location
    pub fn default_path() -> Result<PathBuf, PersistError> {
        let base = dirs::config_dir().ok_or(PersistError::NoCacheDir)?;
        Ok(base.join("tintlab").join("themes.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one snapshot, preserving every other entry in the file
    pub fn save(&self, id: &str, snapshot: &ThemeSnapshot) -> Result<(), PersistError> {
        let mut entries = self.read_all();
        entries.insert(id.to_string(), snapshot.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read one snapshot. Absence is `None`, not an error.
    pub fn load(&self, id: &str) -> Result<Option<ThemeSnapshot>, PersistError> {
        Ok(self.read_all().remove(id))
    }

    fn read_all(&self) -> BTreeMap<String, ThemeSnapshot> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "theme cache unreadable, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "theme cache corrupted, starting empty");
                BTreeMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintlab_core::{ColorCategory, ElementType};
    use tintlab_tokens::default_palette;

    fn snapshot() -> ThemeSnapshot {
        ThemeSnapshot::from_palette(
            &default_palette(ElementType::Cards, ColorCategory::Backgrounds),
            ElementType::Cards,
            ColorCategory::Backgrounds,
        )
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path().join("themes.json"));

        cache.save("default", &snapshot()).unwrap();
        let loaded = cache.load("default").unwrap().unwrap();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn missing_entry_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path().join("themes.json"));

        assert!(cache.load("nope").unwrap().is_none());
        cache.save("a", &snapshot()).unwrap();
        assert!(cache.load("b").unwrap().is_none());
    }

    #[test]
    fn corrupted_file_reads_as_empty_and_recovers_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        fs::write(&path, "{ this is not json").unwrap();

        let cache = LocalCache::new(&path);
        assert!(cache.load("default").unwrap().is_none());

        cache.save("default", &snapshot()).unwrap();
        assert!(cache.load("default").unwrap().is_some());
    }

    #[test]
    fn save_preserves_sibling_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path().join("themes.json"));

        cache.save("one", &snapshot()).unwrap();
        let mut other = snapshot();
        other.shape = ElementType::Buttons;
        cache.save("two", &other).unwrap();

        assert_eq!(cache.load("one").unwrap().unwrap(), snapshot());
        assert_eq!(cache.load("two").unwrap().unwrap().shape, ElementType::Buttons);
    }
}
