use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::config::default_store_path;
use super::launcher::Launcher;

/// A saved (title, URL, alias) triple.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub alias: String,
}

impl Bookmark {
    /// True if `query` equals this bookmark's title, URL, or alias.
    pub fn matches(&self, query: &str) -> bool {
        self.title == query || self.url == query || self.alias == query
    }
}

/// Runtime context holding the store location and the platform launcher.
pub struct AppCtx {
    pub store_path: PathBuf,
    pub launcher: Launcher,
}

impl AppCtx {
    /// Resolves the default store path and detects the platform opener.
    /// Built once in `main` and passed into every command.
    pub fn init() -> Result<Self, String> {
        Ok(Self {
            store_path: default_store_path()?,
            launcher: Launcher::detect(),
        })
    }
}
