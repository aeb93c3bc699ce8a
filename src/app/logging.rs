use tracing_subscriber::{EnvFilter, fmt};

use crate::app::AppError;

pub fn init(directives: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(AppError::logging_init)
}
