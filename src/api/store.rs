//! The main entry point for interacting with the bookmark store.

use crate::core::storage::Bookmark;
use crate::core::utils::ensure_dir;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};
use url::{ParseError, Url};

use super::error::StoreError;

/// The full collection of bookmarks plus its persistence operations.
///
/// Records keep their insertion order; order is only significant for display.
/// The store holds everything in memory and is rewritten as a whole on save.
#[derive(Serialize, Deserialize, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Loads the store from `path`.
    ///
    /// A missing file is not an error: parent directories are created, an
    /// empty store is written out, and that empty store is returned.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                ensure_dir(dir).map_err(StoreError::Init)?;
            }
            let store = Self::default();
            store.save(path)?;
            return Ok(store);
        }

        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Writes the full record list to `path`, replacing the previous content,
    /// then flushes to durable storage. There is no atomic rename; a crash
    /// mid-write can corrupt the file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        file.sync_all()?;
        Ok(())
    }

    /// Appends a new bookmark after validating it against the collection.
    ///
    /// The URL is stored in normalized form. Titles and normalized URLs must
    /// be unique; alias collisions are deliberately not checked. The caller
    /// is responsible for persisting via [`save`](Self::save).
    pub fn add(&mut self, title: &str, url: &str, alias: &str) -> Result<Bookmark, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let url = normalize_url(url)?;

        if self.bookmarks.iter().any(|b| b.title == title) {
            return Err(StoreError::DuplicateTitle(title.to_string()));
        }
        if self.bookmarks.iter().any(|b| b.url == url) {
            return Err(StoreError::DuplicateUrl(url));
        }

        let bookmark = Bookmark {
            title: title.to_string(),
            url,
            alias: alias.to_string(),
        };
        self.bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    /// Removes and returns the first bookmark matching `query` by title, URL,
    /// or alias. The relative order of the remaining records is preserved.
    pub fn remove(&mut self, query: &str) -> Result<Bookmark, StoreError> {
        match self.bookmarks.iter().position(|b| b.matches(query)) {
            Some(idx) => Ok(self.bookmarks.remove(idx)),
            None => Err(StoreError::NotFound(query.to_string())),
        }
    }

    /// Returns the first bookmark matching `query` by title, URL, or alias,
    /// without mutating the store.
    pub fn find(&self, query: &str) -> Result<&Bookmark, StoreError> {
        self.bookmarks
            .iter()
            .find(|b| b.matches(query))
            .ok_or_else(|| StoreError::NotFound(query.to_string()))
    }

    /// Iterates over all bookmarks in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

/// Parses `raw` and re-serializes it to its canonical string form. Parsing
/// collapses `.` and `..` path segments and lowercases the host.
///
/// Input without a scheme is treated as a local path, since bookmarks may
/// point at files and the platform openers handle both. Path input gets its
/// `.` and `..` segments cleaned instead of going through the URL parser.
fn normalize_url(raw: &str) -> Result<String, StoreError> {
    match Url::parse(raw) {
        Ok(parsed) => Ok(parsed.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) if !raw.trim().is_empty() => Ok(clean_path(raw)),
        Err(_) => Err(StoreError::InvalidUrl(raw.to_string())),
    }
}

/// Cleans `.` and `..` segments out of a local path.
fn clean_path(raw: &str) -> String {
    let mut cleaned = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }
    if cleaned.as_os_str().is_empty() {
        ".".to_string()
    } else {
        cleaned.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with_docs() -> BookmarkStore {
        let mut store = BookmarkStore::default();
        store
            .add("Docs", "https://x.com/docs", "d")
            .expect("add should succeed");
        store
    }

    #[test]
    fn load_missing_file_initializes_empty_store() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("bookmarks.json");

        let store = BookmarkStore::load(&path).expect("load");
        assert!(store.is_empty());
        assert!(path.exists(), "load should create the file on first use");
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bookmarks.json");

        let mut store = BookmarkStore::default();
        store.add("Docs", "https://x.com/docs", "d").expect("add");
        store.add("Blog", "https://x.com/blog", "").expect("add");
        store.add("Mail", "https://mail.x.com/", "m").expect("add");
        store.save(&path).expect("save");

        let loaded = BookmarkStore::load(&path).expect("load");
        let titles: Vec<_> = loaded.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Docs", "Blog", "Mail"]);
        assert_eq!(loaded.find("m").expect("find").url, "https://mail.x.com/");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bookmarks.json");
        std::fs::write(&path, "{not json").expect("write");

        assert!(matches!(
            BookmarkStore::load(&path),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn add_normalizes_url() {
        let mut store = BookmarkStore::default();
        let added = store
            .add("Docs", "https://example.com/a/../docs", "")
            .expect("add");
        assert_eq!(added.url, "https://example.com/docs");
    }

    #[test]
    fn add_rejects_unparsable_url() {
        let mut store = BookmarkStore::default();
        assert!(matches!(
            store.add("Docs", "https://in valid.com/", ""),
            Err(StoreError::InvalidUrl(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn add_accepts_local_file_path() {
        let mut store = BookmarkStore::default();
        let added = store.add("Notes", "/home/me/notes.txt", "n").expect("add");
        assert_eq!(added.url, "/home/me/notes.txt");
        assert_eq!(store.find("n").expect("find").title, "Notes");
    }

    #[test]
    fn local_path_segments_are_cleaned() {
        let mut store = BookmarkStore::default();
        let added = store
            .add("Notes", "/home/me/../me/./notes.txt", "")
            .expect("add");
        assert_eq!(added.url, "/home/me/notes.txt");
    }

    #[test]
    fn add_rejects_empty_title() {
        let mut store = BookmarkStore::default();
        assert!(matches!(
            store.add("  ", "https://x.com", ""),
            Err(StoreError::EmptyTitle)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_title_leaves_store_unchanged() {
        let mut store = store_with_docs();
        assert!(matches!(
            store.add("Docs", "https://other.com/", ""),
            Err(StoreError::DuplicateTitle(_))
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("Docs").expect("find").url, "https://x.com/docs");
    }

    #[test]
    fn duplicate_url_checked_after_normalization() {
        let mut store = store_with_docs();
        assert!(matches!(
            store.add("Other", "https://x.com/a/../docs", ""),
            Err(StoreError::DuplicateUrl(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_matches_title_url_and_alias_without_mutating() {
        let store = store_with_docs();
        for query in ["Docs", "https://x.com/docs", "d"] {
            assert_eq!(store.find(query).expect("find").title, "Docs");
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_on_empty_store_is_not_found() {
        let store = BookmarkStore::default();
        assert!(matches!(
            store.find("missing"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn remove_by_alias_returns_record_and_empties_store() {
        let mut store = store_with_docs();
        let removed = store.remove("d").expect("remove");
        assert_eq!(removed.title, "Docs");
        assert_eq!(removed.url, "https://x.com/docs");
        assert!(store.is_empty());
    }

    #[test]
    fn remove_preserves_order_of_remaining_records() {
        let mut store = BookmarkStore::default();
        store.add("A", "https://a.com/", "").expect("add");
        store.add("B", "https://b.com/", "").expect("add");
        store.add("C", "https://c.com/", "").expect("add");

        store.remove("B").expect("remove");
        let titles: Vec<_> = store.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn remove_miss_leaves_store_unchanged() {
        let mut store = store_with_docs();
        assert!(matches!(
            store.remove("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn alias_collision_first_match_wins() {
        // Alias uniqueness is not enforced; lookups resolve to the first
        // record in storage order.
        let mut store = BookmarkStore::default();
        store.add("First", "https://a.com/", "x").expect("add");
        store.add("Second", "https://b.com/", "x").expect("add");

        assert_eq!(store.find("x").expect("find").title, "First");
        assert_eq!(store.remove("x").expect("remove").title, "First");
        assert_eq!(store.find("x").expect("find").title, "Second");
    }
}
