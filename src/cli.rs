//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qo",
    version,
    about = "Quickly open anything from your command line",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Cmd>,

    /// Bookmark to open (title, URL, or alias); shorthand for `qo open`
    pub query: Option<String>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Add a bookmark
    Add {
        title: String,
        url: String,
        #[arg(short, long, help = "Alias for the bookmark")]
        alias: Option<String>,
    },
    /// List all saved bookmarks
    #[command(alias = "ls")]
    List,
    /// Remove a bookmark by title, URL, or alias
    #[command(alias = "rm")]
    Remove { query: String },
    /// Open a bookmark in your default browser
    #[command(alias = "o")]
    Open { query: String },
}
