use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

use tripwise_backend::config::{AppConfig, DATA_DIR_ENV};
use tripwise_backend::domain::{AssumeYes, Confirm, ControllerError};
use tripwise_backend::io::cli::{Cli, CommandHandler, TerminalConfirm};
use tripwise_backend::Backend;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins when set
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ControllerError>() {
            Some(ControllerError::Validation(validation)) => {
                eprintln!("{}", validation);
                ExitCode::from(2)
            }
            _ => {
                error!("{:#}", e);
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let data_directory = AppConfig::resolve_data_directory(cli.data_dir, std::env::var(DATA_DIR_ENV).ok())?;
    let config = AppConfig::load(&data_directory)?;
    let mut backend = Backend::open(config)?;

    let mut assume_yes = AssumeYes;
    let mut terminal = TerminalConfirm::stdio();
    let confirm: &mut dyn Confirm = if cli.yes { &mut assume_yes } else { &mut terminal };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    CommandHandler::new(&mut backend.controller, &backend.renderer, confirm, &mut out).handle(cli.command)?;
    out.flush()?;

    info!("Done");
    Ok(())
}
