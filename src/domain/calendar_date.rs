use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

pub fn to_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Date segment of a waiting-times request path.
///
/// Structured dates are formatted on the way in; strings are passed through
/// untouched and left for the backend to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitingDate {
    Calendar(NaiveDate),
    Raw(String),
}

impl WaitingDate {
    pub fn as_path_segment(&self) -> String {
        match self {
            Self::Calendar(date) => to_iso_date(date),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for WaitingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}

impl From<NaiveDate> for WaitingDate {
    fn from(date: NaiveDate) -> Self {
        Self::Calendar(date)
    }
}

impl From<NaiveDateTime> for WaitingDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Calendar(datetime.date())
    }
}

// The date is read in the timezone the value carries.
impl<Tz: TimeZone> From<DateTime<Tz>> for WaitingDate {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::Calendar(datetime.date_naive())
    }
}

impl From<String> for WaitingDate {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for WaitingDate {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}
