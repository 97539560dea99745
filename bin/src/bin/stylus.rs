use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use stylus::{
    cli::config::{Cli, Command},
    Config,
};
use stylus_bin::commands;
use stylus_log::LogConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so the file writer flushes.
    let _log_guard = match stylus_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => {
            tracing::debug!(log_file = %guard.log_file.display(), "logging initialized");
            Some(guard)
        },
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        },
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let discovered = std::env::current_dir()
        .ok()
        .and_then(|cwd| Config::discover(&cwd));
    let config = Config::load_with_overrides(cli.config.as_deref(), discovered.as_deref())?;

    match cli.command {
        Command::Highlight { file, page } => commands::highlight::run(file.as_deref(), page, &config),
        Command::Keys {
            sequence,
            file,
            caret,
        } => commands::keys::run(&sequence, file, caret, &config),
        Command::Request { file, target } => commands::request::run(file.as_deref(), target),
    }
}
