pub mod adapters;
pub mod app;
pub mod domain;

#[cfg(test)]
mod test_support;

pub use adapters::wait_api::{ApiError, BASE_URL, WaitApiClient};
pub use domain::calendar_date::{WaitingDate, to_iso_date};
pub use domain::models::{Office, OfficeWaitingTimes, StatusRecord, Statuses};
