mod config;
mod error;
mod logging;
mod runtime;

use clap::Parser;

pub use config::{AppConfig, OutputFormat};
pub use error::AppError;
pub use runtime::{Cli, Command, execute};

pub fn run() -> Result<(), AppError> {
    let dotenv_result = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    logging::init(&config.log_filter)?;

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), ".env file loaded"),
        Err(error) => tracing::debug!(error = %error, "no .env file loaded"),
    }

    tracing::debug!(
        output = ?config.output,
        log_filter = %config.log_filter,
        "application bootstrap initialized"
    );

    runtime::run(config, cli)
}
