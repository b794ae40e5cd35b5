// GitHub API response types.
// Only the fields the launcher reads are typed; everything else is kept verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub user profile from `/users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub avatar_url: String,
    pub repos_url: String,
    /// Remaining profile fields, persisted as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Repository entry from the profile's `repos_url` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extract the `message` key GitHub puts in error payloads.
pub fn error_message(payload: &Value) -> Option<String> {
    let message = payload.as_object()?.get("message")?;
    Some(match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}
