//! CLI command implementations
//!
//! Commands own the tokio runtime; the library below them is runtime-agnostic.

use std::path::Path;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::storage::{
    open_store, SqlRecordStore, StorageBackendKind, StorageError, DATABASE_URL_ENV,
};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the records table, then write a default configuration file
///
/// Refuses to overwrite an existing configuration file. The file is only
/// written once the store is ready, so a failed init can be retried.
pub fn init(config_path: &Path) -> CliResult<()> {
    init_with(
        config_path,
        Config::default(),
        std::env::var(DATABASE_URL_ENV).ok(),
    )
}

fn init_with(config_path: &Path, config: Config, database_url: Option<String>) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path));
    }

    let mut storage = config.storage.clone();
    storage.apply_database_url(database_url);

    if storage.backend == StorageBackendKind::Sqlite {
        runtime()?.block_on(async {
            let store = SqlRecordStore::connect(&storage).await?;
            store.ensure_schema().await?;
            store.close().await;
            Ok::<_, StorageError>(())
        })?;
    }

    config.write(config_path)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", &config_path.display().to_string())],
    );
    Ok(())
}

/// Load configuration, open the store and serve HTTP until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    config.apply_env();
    if let Some(port) = port {
        config.server.port = port;
    }

    Logger::set_min_severity(config.log_severity()?);
    log_event(Event::BootStart);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", &config.server.socket_addr()),
            ("path", &config_path.display().to_string()),
        ],
    );

    runtime()?.block_on(async {
        let store = open_store(&config.storage).await?;
        let server = HttpServer::new(config.server.clone(), store);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
