use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::calendar_date::WaitingDate;
use crate::domain::models::{Office, OfficeWaitingTimes, StatusRecord, Statuses};

pub const BASE_URL: &str = "https://st-wait-api.codingmarco.de";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to parse response as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Read-only client for the st-wait backend. Every accessor issues exactly
/// one GET and hands errors back unchanged.
#[derive(Debug, Clone)]
pub struct WaitApiClient {
    http: Client,
    base_url: Url,
}

impl WaitApiClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL)
    }

    /// Points the client at another origin; used to talk to a local backend.
    pub(crate) fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(ApiError::from)
    }

    pub async fn get_offices(&self) -> Result<Vec<Office>, ApiError> {
        self.fetch_json("/offices").await
    }

    pub async fn get_waiting_times(
        &self,
        office_id: i64,
        date: impl Into<WaitingDate>,
    ) -> Result<Vec<StatusRecord>, ApiError> {
        self.fetch_json(&waiting_times_path(office_id, &date.into()))
            .await
    }

    pub async fn get_statuses(&self) -> Result<Statuses, ApiError> {
        self.fetch_json("/statuses").await
    }

    pub async fn get_all_waiting_times(
        &self,
        date: impl Into<WaitingDate>,
    ) -> Result<OfficeWaitingTimes, ApiError> {
        self.fetch_json(&all_waiting_times_path(&date.into())).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.resolve(path)?;
        tracing::debug!(url = %url, "sending request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "response received");

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::from)
    }
}

pub fn waiting_times_path(office_id: i64, date: &WaitingDate) -> String {
    format!("waiting_times/{office_id}/{date}")
}

pub fn all_waiting_times_path(date: &WaitingDate) -> String {
    format!("all_waiting_times/{date}")
}
