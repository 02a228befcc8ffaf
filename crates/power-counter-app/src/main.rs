//! Text-mode front end for Power Counter.
//!
//! Reads one command per line from stdin, applies it through the
//! [`PlayerController`], and reprints the table whenever the observable
//! list changes.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the first argument or `power-counter.yaml`
//! 2. Apply the `POWER_COUNTER_DATA_DIR` override
//! 3. Initialize structured logging (tracing) on stderr
//! 4. Open the configured blob store and the player repository
//! 5. Spawn the table renderer on a list subscription
//! 6. Run the command loop until `quit` or end of input
//! 7. Flush pending writes

mod commands;
mod config;
mod error;
mod render;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use power_counter_core::{PlayerController, PlayerRepository};
use power_counter_store::{FileStore, MemoryStore};
use power_counter_types::PlayerList;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::{Command, GearInput, LevelInput, USAGE};
use crate::config::{
    AppConfig, DATA_DIR_ENV, DEFAULT_CONFIG_PATH, LoggingConfig, StorageBackend, StorageConfig,
};
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging, the store, or stdin fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (mut config, from_file) = load_config(&config_path)?;
    config.apply_overrides(std::env::var(DATA_DIR_ENV).ok());

    init_tracing(&config.logging)?;
    info!(
        path = %config_path.display(),
        from_file,
        backend = ?config.storage.backend,
        directory = %config.storage.directory.display(),
        "Configuration loaded"
    );

    let repository = open_repository(&config.storage).await?;
    let controller = PlayerController::new(repository);
    let ansi = std::io::stdout().is_terminal();

    let renderer = tokio::spawn(render_loop(controller.subscribe(), ansi));

    let result = run(&controller, ansi).await;

    controller.flush().await;
    renderer.abort();
    info!("power-counter stopped");
    result
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<(AppConfig, bool), AppError> {
    if path.exists() {
        Ok((AppConfig::from_file(path)?, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
fn init_tracing(logging: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| AppError::Logging {
            message: format!("invalid log filter {:?}: {e}", logging.level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}

async fn open_repository(storage: &StorageConfig) -> Result<PlayerRepository, AppError> {
    match storage.backend {
        StorageBackend::File => {
            let store = FileStore::open(storage.directory.clone()).await?;
            Ok(PlayerRepository::open(Arc::new(store)).await)
        }
        StorageBackend::Memory => {
            warn!("memory backend selected, changes are lost on exit");
            Ok(PlayerRepository::open(Arc::new(MemoryStore::new())).await)
        }
    }
}

/// Print the table every time the list changes, starting with the current one.
async fn render_loop(mut rx: watch::Receiver<PlayerList>, ansi: bool) {
    while rx.changed().await.is_ok() {
        let table = render::players(&rx.borrow_and_update(), ansi);
        println!("{table}");
    }
}

/// Read and execute commands until `quit` or end of input.
async fn run(controller: &PlayerController, ansi: bool) -> Result<(), AppError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|source| AppError::Input { source })?
    {
        if line.trim().is_empty() {
            continue;
        }
        match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(controller, &command, ansi),
            Err(error) => println!("{error}"),
        }
    }
    Ok(())
}

fn execute(controller: &PlayerController, command: &Command, ansi: bool) {
    let receipt = match command {
        Command::Add => controller.add_player(),
        Command::Reset => Some(controller.reset_all()),
        Command::Delete(id) => controller.delete_player(*id),
        Command::Level(id, LevelInput::Step(step)) => controller.step_level(*id, *step),
        Command::Level(id, LevelInput::Set(level)) => controller.set_level(*id, *level),
        Command::Gear(id, GearInput::Step(step)) => controller.step_gear(*id, *step),
        Command::Gear(id, GearInput::Text(text)) => controller.set_gear_text(*id, text),
        Command::Name(id, name) => controller.set_name(*id, name),
        Command::Color(id, index) => controller.set_color(*id, *index),
        Command::Colors => {
            print!("{}", render::palette(ansi));
            return;
        }
        Command::List => {
            println!("{}", render::players(&controller.players(), ansi));
            return;
        }
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::Quit => return,
    };

    match receipt {
        Some(receipt) => {
            tokio::spawn(async move {
                if let Err(error) = receipt.wait().await {
                    warn!(%error, "player list was not saved");
                }
            });
        }
        None => println!("(no change)"),
    }
}
