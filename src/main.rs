//! Address Book Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout, keeping the address book in
//! a JSON file between runs.

use address_book_assistant::{
    Assistant, Config, ConsoleView, JsonFileBookRepository, SystemClock,
};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the interactive session)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using address book at {}",
        config.address_book_file.display()
    );

    let repository = JsonFileBookRepository::new(&config.address_book_file);
    let mut assistant = Assistant::new(repository, ConsoleView::stdout(), SystemClock)
        .with_max_birthday_window(config.max_birthday_window_days);

    // Runs until `exit`/`close` or end of input, then saves the book
    if let Err(e) = assistant.run(io::stdin().lock()) {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    info!("Address book assistant shutdown complete");
    Ok(())
}
