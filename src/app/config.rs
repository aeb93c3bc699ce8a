use std::str::FromStr;

use crate::app::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "ST_WAIT_OUTPUT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("ST_WAIT_OUTPUT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            output,
            log_filter: lookup("RUST_LOG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "warn".to_string()),
        })
    }
}
