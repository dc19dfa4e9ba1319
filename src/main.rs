use std::fs::OpenOptions;
use std::path::Path;

use clap::Parser;
use mentions::cli::commands::Cli;
use mentions::cli::handlers;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.command.is_none());

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let workspace = cli.workspace.as_deref().map(Path::new);
            if let Err(e) = mentions::tui::run(workspace) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Logs go to stderr, except under the TUI where they would draw over the
/// screen; there they go to `mn.log` in the temp directory.
fn init_logging(verbose: u8, tui: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.format_timestamp_millis();
    if tui {
        let path = std::env::temp_dir().join("mn.log");
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
}
