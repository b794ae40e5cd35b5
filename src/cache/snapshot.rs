// Snapshot model for the cached profile and repository list.
// Handles the freshness check and the bootstrap/refresh transitions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use crate::github::{Repository, UserProfile};

/// Age after which a snapshot is refreshed: 10 minutes.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Whether a snapshot can be used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

/// Persisted cache document.
///
/// Keys this launcher does not own are carried through a refresh untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub data: SnapshotData,
    /// Unix seconds of the last successful refresh, 0 if never refreshed.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_update: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<Repository>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snapshot {
    /// The never-fetched shell written when no snapshot file exists.
    pub fn bootstrap() -> Self {
        Self {
            data: SnapshotData::default(),
            last_update: 0,
            extra: Map::new(),
        }
    }

    /// Replace the profile and repositories wholesale and stamp the refresh time.
    pub fn refreshed(
        mut self,
        user: UserProfile,
        repos: Vec<Repository>,
        now: DateTime<Utc>,
    ) -> Self {
        self.data.user = Some(user);
        self.data.repos = Some(repos);
        self.last_update = now.timestamp();
        self
    }

    /// Seconds elapsed since the last refresh (negative if the clock went back).
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp().saturating_sub(self.last_update)
    }

    /// Stale once `last_update + window < now`; the boundary itself is fresh.
    pub fn freshness(&self, now: DateTime<Utc>, window: Duration) -> Freshness {
        let window = i64::try_from(window.as_secs()).unwrap_or(i64::MAX);
        if self.last_update.saturating_add(window) < now.timestamp() {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }

    /// Profile and repositories, if the snapshot has been populated.
    pub fn contents(&self) -> Option<(&UserProfile, &[Repository])> {
        match (&self.data.user, &self.data.repos) {
            (Some(user), Some(repos)) => Some((user, repos.as_slice())),
            _ => None,
        }
    }
}

/// Falsy documents: `null`, `false`, zero, and empty strings, arrays, or objects.
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Accept integer or float seconds; fractions are truncated.
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|secs| secs.trunc() as i64))
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp {}", number)))
}
