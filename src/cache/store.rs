// Snapshot file store.
// Reads and validates the snapshot, writes the bootstrap shell and refreshed data.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::error::{LauncherError, Result};

use super::snapshot::{Snapshot, is_empty_document};

/// Read the snapshot at `path`; `None` if there is no file.
///
/// Unparseable, empty, or mis-shaped documents are `CorruptSnapshot`.
pub fn read_snapshot(path: &Path) -> Result<Option<Snapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read(path)?;
    let corrupt = |reason: String| LauncherError::CorruptSnapshot {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value =
        serde_json::from_slice(&contents).map_err(|e| corrupt(format!("unreadable: {}", e)))?;
    if is_empty_document(&document) {
        return Err(corrupt("empty document".to_string()));
    }

    let snapshot = serde_json::from_value(document).map_err(|e| corrupt(e.to_string()))?;
    Ok(Some(snapshot))
}

/// Write the never-fetched shell, compact.
pub fn write_bootstrap(path: &Path) -> Result<()> {
    let json = serde_json::to_string(&Snapshot::bootstrap())?;
    write_atomic(path, json.as_bytes())
}

/// Write a snapshot pretty-printed with sorted keys.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let value = sort_keys(serde_json::to_value(snapshot)?);

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    write_atomic(path, &buf)
}

/// Rebuild every object with its keys in lexical order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "snapshot written");
    Ok(())
}
