//! Contact Book - Main entry point
//!
//! Runs the assistant bot on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::bot::run_stdio;
use contact_book::{Config, Dispatcher, JsonFileRepository, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().inspect_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
    })?;

    // Initialize logging (stderr only, stdout belongs to the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book with snapshot file: {}",
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(config.data_file.clone());
    let dispatcher = Dispatcher::new(config.birthday_horizon_days);
    let session = Session::new(repository, dispatcher);

    match run_stdio(&session).await {
        Ok(book) => {
            info!("Session finished with {} contacts", book.len());
            Ok(())
        }
        Err(e) => {
            error!("Session failed: {:#}", e);
            Err(e)
        }
    }
}
