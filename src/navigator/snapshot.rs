//! Saved navigator state.
//!
//! Decoding is lenient: entries for unknown sections, entries that do not
//! parse as a [`Snapshot`] and session fields of the wrong shape are dropped,
//! never reported as errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::section::Section;
use super::view_model::Snapshot;

/// Per-section view-model snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "BTreeMap<String, Snapshot>")]
pub struct SnapshotMap {
    entries: BTreeMap<Section, Snapshot>,
}

impl SnapshotMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section, snapshot: Snapshot) {
        self.entries.insert(section, snapshot);
    }

    pub fn get(&self, section: Section) -> Option<&Snapshot> {
        self.entries.get(&section)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &Snapshot)> {
        self.entries.iter().map(|(s, snap)| (*s, snap))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Value> for SnapshotMap {
    fn from(raw: Value) -> Self {
        let raw = match raw {
            Value::Object(raw) => raw,
            Value::Null => return Self::default(),
            other => {
                tracing::warn!(found = %other, "Snapshot map is not an object, ignoring");
                return Self::default();
            }
        };
        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            let Some(section) = Section::parse(&key) else {
                tracing::warn!(key = %key, "Dropping snapshot for unknown section");
                continue;
            };
            match serde_json::from_value::<Snapshot>(value) {
                Ok(snapshot) => {
                    entries.insert(section, snapshot);
                }
                Err(e) => {
                    tracing::warn!(section = %section, error = %e, "Dropping malformed snapshot");
                }
            }
        }
        Self { entries }
    }
}

impl From<SnapshotMap> for BTreeMap<String, Snapshot> {
    fn from(map: SnapshotMap) -> Self {
        map.entries
            .into_iter()
            .map(|(section, snapshot)| (section.as_str().to_string(), snapshot))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone)]
struct RawSession {
    #[serde(default, deserialize_with = "lenient_string")]
    active: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default)]
    screens: SnapshotMap,
}

/// A string field; any other JSON shape reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            tracing::warn!(found = %other, "Session field is not a string, ignoring");
            None
        }
    })
}

/// Everything the host persists before the process may be destroyed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawSession", into = "RawSession")]
pub struct SavedSession {
    /// Section that was displayed when the session was saved.
    pub active: Option<Section>,
    /// Title that was displayed when the session was saved.
    pub title: Option<String>,
    pub screens: SnapshotMap,
}

impl From<RawSession> for SavedSession {
    fn from(raw: RawSession) -> Self {
        let active = raw.active.and_then(|key| {
            let section = Section::parse(&key);
            if section.is_none() {
                tracing::warn!(key = %key, "Saved active section is unknown, ignoring");
            }
            section
        });
        Self {
            active,
            title: raw.title,
            screens: raw.screens,
        }
    }
}

impl From<SavedSession> for RawSession {
    fn from(session: SavedSession) -> Self {
        Self {
            active: session.active.map(|s| s.as_str().to_string()),
            title: session.title,
            screens: session.screens,
        }
    }
}
