use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use owo_colors::{OwoColorize, Style};
use todo_core::error::CoreError;
use todo_core::repository::JsonRepository;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod views;

/// Exit code when no subcommand is given or a command fails.
const FAILURE_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    init_tracing();

    let cli = cli::Cli::parse();
    let Some(command) = cli.command else {
        // Help output is best effort; the exit code is what matters.
        let _ = cli::Cli::command().print_help();
        println!();
        return ExitCode::from(FAILURE_EXIT_CODE);
    };

    let config = config::Config::new().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring invalid configuration");
        config::Config::default()
    });
    let path = cli.file.unwrap_or(config.file);

    let mut repository = match JsonRepository::open(&path) {
        Ok(repository) => repository,
        Err(e) => {
            handle_error(e.into());
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    let result = match command {
        cli::Commands::Add(command) => commands::add::add_todo(&mut repository, command),
        cli::Commands::List(command) => commands::list::list_todos(&repository, command),
        cli::Commands::Done(command) => commands::done::done_todo(&mut repository, command),
        cli::Commands::Remove(command) => commands::remove::remove_todo(&mut repository, command),
        cli::Commands::Edit(command) => commands::edit::edit_todo(&mut repository, command),
        cli::Commands::Find(command) => commands::find::find_todos(&repository, command),
    };

    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            handle_error(e);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

/// Logs go to stderr so stdout only carries command output.
/// Defaults to WARN; set RUST_LOG=debug for storage details.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Io(e)) => {
            eprintln!(
                "{} Could not access the data file: {}",
                "Error:".style(error_style),
                e
            );
        }
        _ => eprintln!("{} {}", "Error:".style(error_style), err),
    }
}
