use crate::cli::Cmd;
use crate::core::storage::AppCtx;

pub mod add;
pub mod list;
pub mod open;
pub mod remove;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Add { title, url, alias } => {
            add::run(ctx, &title, &url, alias.as_deref().unwrap_or(""))
        }
        Cmd::List => list::run(ctx),
        Cmd::Remove { query } => remove::run(ctx, &query),
        Cmd::Open { query } => open::run(ctx, &query),
    }
}
