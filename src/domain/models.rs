use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub label: String,
    pub url: String,
    pub id: i64,
}

/// One sample of an office's queue status. `captured_at` is kept exactly as
/// the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub captured_at: String,
    pub status_id: i64,
}

/// Lookup table from status id (string-encoded integer) to its label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statuses(pub BTreeMap<String, String>);

impl Statuses {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn label_for(&self, status_id: i64) -> Option<&str> {
        self.get(&status_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, label)| (id.as_str(), label.as_str()))
    }

    /// Entries ordered by numeric id; keys that are not integers go last.
    pub fn sorted_by_id(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by_key(|(id, _)| match id.trim().parse::<i64>() {
            Ok(numeric) => (false, numeric, *id),
            Err(_) => (true, 0, *id),
        });
        entries
    }
}

/// Waiting times of every office for one day, keyed by office id.
pub type OfficeWaitingTimes = BTreeMap<String, Vec<StatusRecord>>;
