//! Locally persisted bookmarks.
//!
//! Favorites are a client-only concept: a per-viewing-user JSON file
//! (`favorites_<user_id>.json`, the crate's analog of a namespaced browser
//! local-storage key) holding snapshots of bookmarked profiles. Snapshots are
//! taken at save time and never reconciled against live server data, so they
//! can go stale by design. There is no cross-device sync.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Snapshot of a bookmarked profile at the moment it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub name: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
}

/// Favorites map for one viewing user, persisted immediately on every change.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    entries: BTreeMap<String, Favorite>,
}

impl FavoritesStore {
    /// Opens (or initializes) the store for `viewer_id` under `dir`.
    ///
    /// A missing or unreadable file loads as an empty store; corruption is
    /// logged and discarded rather than surfaced.
    pub fn open(dir: impl AsRef<Path>, viewer_id: &str) -> Self {
        let path = dir.as_ref().join(format!("favorites_{}.json", viewer_id));
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Favorite>>(&raw) {
                Ok(list) => list.into_iter().map(|f| (f.id.clone(), f)).collect(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unable to parse favorites, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds the snapshot if absent, removes it if present, and persists
    /// immediately. Returns whether the entry is a favorite afterwards.
    pub fn toggle(&mut self, favorite: Favorite) -> io::Result<bool> {
        let now_saved = if self.entries.remove(&favorite.id).is_some() {
            false
        } else {
            self.entries.insert(favorite.id.clone(), favorite);
            true
        };
        self.save()?;
        Ok(now_saved)
    }

    /// Writes the store back out as a JSON array (the shape the original
    /// local-storage key held).
    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let list: Vec<&Favorite> = self.entries.values().collect();
        let raw = serde_json::to_string(&list)?;
        std::fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skill-exchange-favs-{}-{}", tag, std::process::id()))
    }

    fn sample(id: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            name: format!("User {}", id),
            teach_skills: vec!["Rust".to_string()],
            learn_skills: vec![],
        }
    }

    #[test]
    fn toggle_off_persists_immediately() {
        let dir = temp_store_dir("toggle");
        let mut store = FavoritesStore::open(&dir, "7");
        assert!(store.toggle(sample("42")).unwrap());
        assert!(store.contains("42"));

        // Reload from disk: the entry survived the first toggle.
        let reloaded = FavoritesStore::open(&dir, "7");
        assert!(reloaded.contains("42"));

        // Toggle off and reload again: the identifier must be absent.
        assert!(!store.toggle(sample("42")).unwrap());
        let reloaded = FavoritesStore::open(&dir, "7");
        assert!(!reloaded.contains("42"));
        assert!(reloaded.is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn stores_are_namespaced_per_viewer() {
        let dir = temp_store_dir("namespace");
        let mut alice = FavoritesStore::open(&dir, "1");
        alice.toggle(sample("9")).unwrap();

        let bob = FavoritesStore::open(&dir, "2");
        assert!(!bob.contains("9"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = temp_store_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("favorites_3.json"), "not json at all").unwrap();

        let store = FavoritesStore::open(&dir, "3");
        assert!(store.is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }
}
