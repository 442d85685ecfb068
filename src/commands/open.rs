use crate::api::BookmarkStore;
use crate::core::storage::AppCtx;
use console::style;

/// Open a bookmark with the platform's default URL handler.
pub fn run(ctx: &AppCtx, query: &str) -> Result<(), String> {
    let store = BookmarkStore::load(&ctx.store_path)
        .map_err(|e| format!("Failed to load bookmarks: {}", e))?;

    let bookmark = store.find(query).map_err(|e| e.to_string())?;

    println!(
        "{} opening {} ({}) in your browser...",
        style("•").green().bold(),
        style(&bookmark.title).yellow(),
        bookmark.url
    );
    ctx.launcher
        .open(&bookmark.url)
        .map_err(|e| format!("Failed to open bookmark: {}", e))
}
