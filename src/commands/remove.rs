use crate::api::BookmarkStore;
use crate::core::storage::AppCtx;
use console::style;

/// Remove a bookmark and persist the store.
pub fn run(ctx: &AppCtx, query: &str) -> Result<(), String> {
    let mut store = BookmarkStore::load(&ctx.store_path)
        .map_err(|e| format!("Failed to load bookmarks: {}", e))?;

    let removed = store.remove(query).map_err(|e| e.to_string())?;

    store
        .save(&ctx.store_path)
        .map_err(|e| format!("Failed to save bookmarks: {}", e))?;

    println!(
        "{} bookmark removed: {} ({})",
        style("•").green().bold(),
        style(&removed.title).yellow(),
        removed.url
    );
    Ok(())
}
