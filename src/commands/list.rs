use crate::api::BookmarkStore;
use crate::core::storage::AppCtx;
use console::style;

/// List every saved bookmark in storage order.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let store = BookmarkStore::load(&ctx.store_path)
        .map_err(|e| format!("Failed to load bookmarks: {}", e))?;

    if store.is_empty() {
        println!(
            "{}",
            style("No bookmarks yet. Use 'qo add <title> <url>' to add one.")
                .green()
                .bold()
        );
        return Ok(());
    }

    println!("{}", style("Saved bookmarks:").green().bold());
    for bookmark in store.iter() {
        if bookmark.alias.is_empty() {
            println!(
                "  {} {} - {}",
                style("•").green(),
                style(&bookmark.title).yellow(),
                bookmark.url
            );
        } else {
            println!(
                "  {} {} ({}) - {}",
                style("•").green(),
                style(&bookmark.title).yellow(),
                style(&bookmark.alias).dim(),
                bookmark.url
            );
        }
    }
    Ok(())
}
