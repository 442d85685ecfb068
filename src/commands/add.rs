use crate::api::BookmarkStore;
use crate::core::storage::AppCtx;
use console::style;

/// Add a bookmark and persist the store.
pub fn run(ctx: &AppCtx, title: &str, url: &str, alias: &str) -> Result<(), String> {
    let mut store = BookmarkStore::load(&ctx.store_path)
        .map_err(|e| format!("Failed to load bookmarks: {}", e))?;

    let added = store
        .add(title, url, alias)
        .map_err(|e| format!("Failed to add bookmark: {}", e))?;

    store
        .save(&ctx.store_path)
        .map_err(|e| format!("Failed to save bookmarks: {}", e))?;

    println!(
        "{} bookmark added: {} ({})",
        style("•").green().bold(),
        style(&added.title).yellow(),
        added.url
    );
    Ok(())
}
