//! Vela shell
//!
//! Headless front end for the browser chrome. Every command prints a JSON
//! `CommandResult` on stdout; logs go to stderr.

mod args;
mod commands;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use args::{Args, Command, SettingsAction};
use commands::{features, navigation, privacy, session, settings, CommandResult};
use state::AppState;
use vela_core::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    vela_core::init_logging(args.log_level());

    let config = load_config(&args)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Using data directory");

    let state = AppState::new(config).context("Failed to open browser state")?;
    state.initialize().context("Failed to initialize browser")?;

    let success = run(&state, args.command)?;
    if !success {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }

    Ok(config)
}

fn run(state: &AppState, command: Command) -> Result<bool> {
    match command {
        Command::Resolve {
            input,
            search_engine,
        } => print(navigation::resolve_input(state, &input, search_engine)),
        Command::Check { address, patterns } => {
            print(privacy::check_address(state, &address, &patterns))
        }
        Command::Privacy => print(privacy::get_privacy_info(state)),
        Command::Settings { action } => match action {
            SettingsAction::Show => print(settings::get_settings(state)),
            SettingsAction::SetSearchEngine { template } => {
                print(settings::set_search_engine(state, &template))
            }
            SettingsAction::SetTint { color } => print(settings::set_tint_color(state, &color)),
        },
        Command::Features => print(features::list_features()),
        Command::Browse => {
            let stdin = std::io::stdin();
            session::run(state, stdin.lock(), std::io::stdout())?;
            Ok(true)
        }
    }
}

fn print<T: Serialize>(result: CommandResult<T>) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.success)
}
