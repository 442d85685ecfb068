//! Resolves where the bookmark file lives on disk.

use std::env;
use std::path::{Path, PathBuf};

/// Builds the bookmark file path under a given home directory.
pub fn store_path_in(home: &Path) -> PathBuf {
    home.join(".config")
        .join("quick-open")
        .join("bookmarks.json")
}

/// The default storage path, derived from `$HOME`.
pub fn default_store_path() -> Result<PathBuf, String> {
    let home = env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
    Ok(store_path_in(Path::new(&home)))
}
