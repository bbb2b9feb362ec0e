mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{new_mode, path_mode, since_mode};
use journal_core::{Config, Store};
use render::{RenderOptions, Renderer};
use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("journal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    init_tracing(cli.verbose);

    let config = Config::load(cli.journal_path.clone());
    let store = Store::new(&config);
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
        ..Default::default()
    }));

    match &cli.command {
        Command::New(args) => new_mode(args, &config, &store, &renderer),
        Command::Since => since_mode(&store, &renderer),
        Command::Path => {
            path_mode(&store, &renderer);
            Ok(())
        }
    }
}

/// Logs go to stderr. `JOURNAL_LOG` takes an env-filter directive; `-v` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("JOURNAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
