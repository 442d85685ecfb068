use clap::{CommandFactory, Parser};
use quick_open::cli::Cli;
use quick_open::commands;
use quick_open::core::storage::AppCtx;

fn main() {
    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init()?;

    match (cli.command, cli.query) {
        (Some(command), _) => commands::dispatch(command, &ctx),
        (None, Some(query)) => commands::open::run(&ctx, &query),
        (None, None) => {
            Cli::command().print_help().map_err(|e| e.to_string())?;
            Ok(())
        }
    }
}
